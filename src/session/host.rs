//=========================================================================
// Session Host
//=========================================================================
//
// Holds the one active session of the process.
//
// The host is an explicit context object owned by the game's top level.
// Whatever needs the session is given the host (or a `SessionHandle`)
// instead of reaching for a global.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::{SessionBuilder, SessionController};
use crate::error::SessionError;

//=== SessionHost =========================================================

/// Slot for the single active [`SessionController`].
///
/// # Lifecycle
///
/// 1. [`install`](Self::install) builds and activates a session
/// 2. the frame loop calls [`tick`](Self::tick) and event callbacks reach
///    the session through [`active_mut`](Self::active_mut) or a
///    [`SessionHandle`](crate::core::signals::SessionHandle)
/// 3. [`teardown`](Self::teardown) clears the slot at shutdown
///
/// A second install while a session is active discards the newcomer
/// before it is built, leaving the original untouched.
#[derive(Default)]
pub struct SessionHost {
    active: Option<SessionController>,
}

impl SessionHost {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Builds the session described by `builder`, activates it and makes
    /// it the active session.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyActive`] if a session is already installed;
    ///   `builder` is dropped without being built.
    /// - [`SessionError::MissingCollaborator`] if `builder` lacks a
    ///   required collaborator.
    pub fn install(
        &mut self,
        builder: SessionBuilder,
    ) -> Result<&mut SessionController, SessionError> {
        if self.active.is_some() {
            warn!("Session already active, discarding duplicate");
            return Err(SessionError::AlreadyActive);
        }

        let mut session = builder.build()?;
        session.activate();
        info!("Session installed");

        Ok(self.active.insert(session))
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&SessionController> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut SessionController> {
        self.active.as_mut()
    }

    /// Ticks the active session. Without one, `dt` passes through unscaled.
    pub fn tick(&mut self, dt: Duration) -> Duration {
        match self.active.as_mut() {
            Some(session) => session.tick(dt),
            None => dt,
        }
    }

    /// Removes and returns the active session.
    pub fn teardown(&mut self) -> Option<SessionController> {
        let session = self.active.take();
        if session.is_some() {
            info!("Session torn down");
        }
        session
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::AudioClip;
    use crate::core::state::SessionState;
    use crate::error::Collaborator;
    use crate::headless::{ObstacleField, PlayerSwitch, RecordingChannel, TextLabel, Toggle};

    struct Parts {
        player: PlayerSwitch,
        score: TextLabel,
        play_button: Toggle,
        game_over: Toggle,
        channel: RecordingChannel,
    }

    fn parts() -> Parts {
        Parts {
            player: PlayerSwitch::new(true),
            score: TextLabel::new(),
            play_button: Toggle::new(true),
            game_over: Toggle::new(false),
            channel: RecordingChannel::new(),
        }
    }

    fn builder(parts: &Parts) -> SessionBuilder {
        SessionBuilder::new()
            .with_player(parts.player.clone())
            .with_score_display(parts.score.clone())
            .with_play_button(parts.play_button.clone())
            .with_game_over_panel(parts.game_over.clone())
            .with_obstacles(ObstacleField::new())
            .with_audio_channel(parts.channel.clone())
            .with_menu_music(AudioClip::new("menu"))
    }

    #[test]
    fn new_host_is_empty() {
        let host = SessionHost::new();
        assert!(!host.is_active());
        assert!(host.active().is_none());
    }

    #[test]
    fn install_activates_session() {
        let parts = parts();
        let mut host = SessionHost::new();

        let session = host.install(builder(&parts)).unwrap();

        assert_eq!(session.state(), SessionState::Menu);
        assert!(session.is_paused());
        assert!(!parts.player.is_enabled());
        assert!(parts.channel.is_looping());
        assert!(host.is_active());
    }

    #[test]
    fn duplicate_install_keeps_original() {
        let original = parts();
        let duplicate = parts();
        let mut host = SessionHost::new();
        host.install(builder(&original)).unwrap();
        host.active_mut().unwrap().start_game();
        host.active_mut().unwrap().increase_score();

        let result = host.install(builder(&duplicate));

        assert_eq!(result.err(), Some(SessionError::AlreadyActive));

        let session = host.active().unwrap();
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 1);
        assert!(!session.is_paused());
        assert!(original.player.is_enabled());

        // The duplicate never touched its collaborators.
        assert!(duplicate.player.is_enabled());
        assert!(duplicate.channel.calls().is_empty());
        assert_eq!(duplicate.score.pushes(), 0);
        assert!(duplicate.play_button.is_visible());
    }

    #[test]
    fn failed_install_leaves_host_empty() {
        let mut host = SessionHost::new();

        let result = host.install(SessionBuilder::new());

        assert_eq!(
            result.err(),
            Some(SessionError::MissingCollaborator(Collaborator::Player))
        );
        assert!(!host.is_active());
    }

    #[test]
    fn teardown_clears_slot_and_allows_reinstall() {
        let parts = parts();
        let mut host = SessionHost::new();
        host.install(builder(&parts)).unwrap();

        let old = host.teardown();
        assert!(old.is_some());
        assert!(!host.is_active());
        assert!(host.teardown().is_none());

        assert!(host.install(builder(&parts)).is_ok());
        assert!(host.is_active());
    }

    #[test]
    fn tick_without_session_passes_time_through() {
        let mut host = SessionHost::new();
        let dt = Duration::from_millis(16);

        assert_eq!(host.tick(dt), dt);
    }

    #[test]
    fn tick_forwards_to_active_session() {
        let parts = parts();
        let mut host = SessionHost::new();
        let handle = host.install(builder(&parts)).unwrap().handle();
        let dt = Duration::from_millis(16);

        assert_eq!(host.tick(dt), Duration::ZERO);

        handle.request_start();
        assert_eq!(host.tick(dt), dt);
        assert_eq!(host.active().unwrap().state(), SessionState::Playing);
    }
}
