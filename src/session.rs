//=========================================================================
// Arcade Session
//
// Game-session controller for a single-screen arcade game.
//
// Architecture:
// ```text
//     SessionBuilder ──install()──> SessionHost ──> SessionController
//         │                                          │
//         ├─ with_player() ...                       ├─ start_game()
//         ├─ with_audio_channel()                    ├─ end_game()
//         └─ with_menu_track()                       ├─ increase_score()
//                                                    └─ tick(dt)
// ```
//
// State machine:
// ```text
//     (activate) ──> Menu ──start──> Playing ──end──> GameOver
//                                      ^                 │
//                                      └──────start──────┘
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod host;

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};
use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::audio::{AudioChannel, AudioClip, AudioCues, AudioDirector, BackgroundTrack};
use crate::core::clock::{SimulationClock, TimeScale};
use crate::core::collaborators::{ObstacleRegistry, PlayerControl, TextSink, Visibility};
use crate::core::signals::{SessionHandle, SessionSignal, SignalCollector, StampedSignal};
use crate::core::state::{SessionState, SessionTrigger};
use crate::error::{Collaborator, SessionError};

//=== Public API ==========================================================

pub use host::SessionHost;

//=== SessionBuilder ======================================================

/// Builder for configuring a [`SessionController`].
///
/// Collects the collaborators and settings of a session. Nothing happens
/// until the builder is handed to [`SessionHost::install`], which builds
/// and activates the controller.
///
/// # Required Collaborators
///
/// Player control, score display, play button, game-over panel and
/// obstacle registry. Installing without any of them fails with
/// [`SessionError::MissingCollaborator`].
///
/// # Optional Audio
///
/// The audio channel and each clip may be left unset. The session then
/// logs an error at every cue it cannot play and carries on silently.
///
/// # Default Values
///
/// - **Menu track**: [`BackgroundTrack::Menu`]
/// - **Restart music on silence**: off
/// - **Signal capacity**: 64 queued signals
/// - **Signals per tick**: 32
///
/// # Examples
///
/// ```
/// use aetheric_session::prelude::*;
/// use aetheric_session::headless::{ObstacleField, PlayerSwitch, TextLabel, Toggle};
///
/// let mut host = SessionHost::new();
/// let session = host
///     .install(
///         SessionBuilder::new()
///             .with_player(PlayerSwitch::new(false))
///             .with_score_display(TextLabel::new())
///             .with_play_button(Toggle::new(true))
///             .with_game_over_panel(Toggle::new(false))
///             .with_obstacles(ObstacleField::new())
///             .with_menu_track(BackgroundTrack::Game),
///     )
///     .unwrap();
///
/// assert_eq!(session.state(), SessionState::Menu);
/// ```
pub struct SessionBuilder {
    player: Option<Box<dyn PlayerControl>>,
    score_display: Option<Box<dyn TextSink>>,
    play_button: Option<Box<dyn Visibility>>,
    game_over_panel: Option<Box<dyn Visibility>>,
    obstacles: Option<Box<dyn ObstacleRegistry>>,
    audio_channel: Option<Box<dyn AudioChannel>>,
    cues: AudioCues,
    menu_track: BackgroundTrack,
    restart_music_on_silence: bool,
    signal_capacity: usize,
    max_signals_per_tick: usize,
}

impl SessionBuilder {
    /// Creates a builder with no collaborators and default settings.
    pub fn new() -> Self {
        Self {
            player: None,
            score_display: None,
            play_button: None,
            game_over_panel: None,
            obstacles: None,
            audio_channel: None,
            cues: AudioCues::default(),
            menu_track: BackgroundTrack::Menu,
            restart_music_on_silence: false,
            signal_capacity: 64,
            max_signals_per_tick: 32,
        }
    }

    //--- Collaborators ----------------------------------------------------

    pub fn with_player(mut self, player: impl PlayerControl + 'static) -> Self {
        self.player = Some(Box::new(player));
        self
    }

    pub fn with_score_display(mut self, display: impl TextSink + 'static) -> Self {
        self.score_display = Some(Box::new(display));
        self
    }

    pub fn with_play_button(mut self, button: impl Visibility + 'static) -> Self {
        self.play_button = Some(Box::new(button));
        self
    }

    pub fn with_game_over_panel(mut self, panel: impl Visibility + 'static) -> Self {
        self.game_over_panel = Some(Box::new(panel));
        self
    }

    pub fn with_obstacles(mut self, obstacles: impl ObstacleRegistry + 'static) -> Self {
        self.obstacles = Some(Box::new(obstacles));
        self
    }

    //--- Audio ------------------------------------------------------------

    /// Sets the channel used for both looping music and one-shots.
    pub fn with_audio_channel(mut self, channel: impl AudioChannel + 'static) -> Self {
        self.audio_channel = Some(Box::new(channel));
        self
    }

    /// Replaces all three clips at once.
    pub fn with_audio_cues(mut self, cues: AudioCues) -> Self {
        self.cues = cues;
        self
    }

    pub fn with_menu_music(mut self, clip: AudioClip) -> Self {
        self.cues.menu_music = Some(clip);
        self
    }

    pub fn with_game_music(mut self, clip: AudioClip) -> Self {
        self.cues.game_music = Some(clip);
        self
    }

    pub fn with_death_sound(mut self, clip: AudioClip) -> Self {
        self.cues.death_sound = Some(clip);
        self
    }

    /// Selects the track looping on the menu screen.
    ///
    /// [`BackgroundTrack::Game`] lets the game theme idle under the menu;
    /// the first round then continues it instead of restarting it.
    ///
    /// Default: [`BackgroundTrack::Menu`]
    pub fn with_menu_track(mut self, track: BackgroundTrack) -> Self {
        self.menu_track = track;
        self
    }

    /// Restarts the game track once the channel falls silent after a
    /// death, so the game-over screen is not left quiet.
    ///
    /// Default: off
    pub fn restart_music_on_silence(mut self, enabled: bool) -> Self {
        self.restart_music_on_silence = enabled;
        self
    }

    //--- Signals ----------------------------------------------------------

    /// Sets how many collaborator signals may be queued between ticks
    /// before further points are dropped. Play presses and deaths are
    /// always queued.
    ///
    /// Default: 64
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_signal_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Signal capacity must be positive");
        self.signal_capacity = capacity;
        self
    }

    /// Sets how many queued signals a single tick applies.
    ///
    /// Default: 32
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_signals_per_tick(mut self, max: usize) -> Self {
        assert!(max > 0, "Signals per tick must be positive");
        self.max_signals_per_tick = max;
        self
    }

    //--- Build ------------------------------------------------------------

    /// Validates the configuration and produces an inactive controller.
    pub(crate) fn build(self) -> Result<SessionController, SessionError> {
        let player = require(self.player, Collaborator::Player)?;
        let score_display = require(self.score_display, Collaborator::ScoreDisplay)?;
        let play_button = require(self.play_button, Collaborator::PlayButton)?;
        let game_over_panel = require(self.game_over_panel, Collaborator::GameOverPanel)?;
        let obstacles = require(self.obstacles, Collaborator::Obstacles)?;

        if self.audio_channel.is_none() {
            warn!("No audio channel configured, session will run silent");
        }

        debug!(
            "Building session (menu track: {:?}, signal capacity: {}, per tick: {})",
            self.menu_track, self.signal_capacity, self.max_signals_per_tick
        );

        let (sender, receiver) = unbounded();

        Ok(SessionController {
            state: SessionState::Menu,
            score: 0,
            audio: AudioDirector::new(self.audio_channel, self.cues),
            clock: SimulationClock::new(),
            player,
            score_display,
            play_button,
            game_over_panel,
            obstacles,
            menu_track: self.menu_track,
            restart_music_on_silence: self.restart_music_on_silence,
            round: Arc::new(AtomicU64::new(0)),
            sender,
            signal_capacity: self.signal_capacity,
            signals: SignalCollector::new(receiver, self.max_signals_per_tick),
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require<T>(value: Option<T>, which: Collaborator) -> Result<T, SessionError> {
    value.ok_or_else(|| {
        error!("Session setup failed: no {} configured", which);
        SessionError::MissingCollaborator(which)
    })
}

//=== SessionController ===================================================

/// Session state machine with score, audio cues and simulation control.
///
/// Obtained from [`SessionHost::install`]. Every operation completes
/// synchronously; calls that make no sense in the current state are
/// ignored.
pub struct SessionController {
    state: SessionState,
    score: u32,
    audio: AudioDirector,
    clock: SimulationClock,
    player: Box<dyn PlayerControl>,
    score_display: Box<dyn TextSink>,
    play_button: Box<dyn Visibility>,
    game_over_panel: Box<dyn Visibility>,
    obstacles: Box<dyn ObstacleRegistry>,
    menu_track: BackgroundTrack,
    restart_music_on_silence: bool,
    round: Arc<AtomicU64>,
    sender: Sender<StampedSignal>,
    signal_capacity: usize,
    signals: SignalCollector,
}

impl SessionController {
    //--- Activation -------------------------------------------------------

    /// Enters the menu: starts the menu track and freezes the simulation.
    pub(crate) fn activate(&mut self) {
        info!("Session activated, entering {:?}", self.state);
        self.audio.play_background(self.menu_track);
        self.pause();
    }

    //--- Transitions ------------------------------------------------------

    /// Starts a round from the menu or the game-over screen.
    ///
    /// Resets the score, hides the menu UI, resumes the simulation, hands
    /// control to the player, clears obstacles left from the previous
    /// round and starts the game track. Ignored while a round is running.
    pub fn start_game(&mut self) {
        let Some(next) = self.state.next(SessionTrigger::StartGame) else {
            debug!("Start ignored while {:?}", self.state);
            return;
        };

        debug!("Session {:?} -> {:?}", self.state, next);
        self.state = next;
        self.round.fetch_add(1, Ordering::AcqRel);

        self.score = 0;
        self.push_score();

        self.play_button.hide();
        self.game_over_panel.hide();

        self.resume();
        self.clear_obstacles();

        self.audio.play_background(BackgroundTrack::Game);
        info!("Round started");
    }

    /// Ends the running round.
    ///
    /// Shows the menu UI, freezes the simulation, takes control away from
    /// the player and plays the death sound. Ignored unless a round is
    /// running, so repeated death reports collapse into one.
    pub fn end_game(&mut self) {
        let Some(next) = self.state.next(SessionTrigger::EndGame) else {
            trace!("End ignored while {:?}", self.state);
            return;
        };

        debug!("Session {:?} -> {:?}", self.state, next);
        self.state = next;

        self.play_button.show();
        self.game_over_panel.show();

        self.pause();
        self.audio.play_death_sound();
        info!("Round over, final score {}", self.score);
    }

    /// Adds one point and pushes the new score to the display.
    ///
    /// Ignored unless a round is running.
    pub fn increase_score(&mut self) {
        if self.state != SessionState::Playing {
            trace!("Score ignored while {:?}", self.state);
            return;
        }

        self.score = self.score.saturating_add(1);
        self.push_score();
    }

    //--- Frame Entry ------------------------------------------------------

    /// Per-frame entry point.
    ///
    /// Applies queued collaborator signals in arrival order, runs the
    /// optional game-over music restart, and returns `dt` scaled by the
    /// simulation time scale (zero while frozen).
    ///
    /// Deaths and points sent before the current round started are
    /// discarded.
    pub fn tick(&mut self, dt: Duration) -> Duration {
        for stamped in self.signals.drain_frame() {
            self.apply(stamped);
        }

        if self.restart_music_on_silence
            && self.state == SessionState::GameOver
            && self.audio.can_play(BackgroundTrack::Game)
            && self.audio.is_silent()
        {
            debug!("Game-over screen fell silent, restarting game music");
            self.audio.play_background(BackgroundTrack::Game);
        }

        self.clock.reader().scale(dt)
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_stopped()
    }

    /// Read-only view of the simulation time scale for other entities.
    pub fn time_scale(&self) -> TimeScale {
        self.clock.reader()
    }

    /// Background track currently looping, if any.
    pub fn background_track(&self) -> Option<BackgroundTrack> {
        self.audio.current()
    }

    /// Handle collaborators use to report play presses, deaths and points.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(self.sender.clone(), Arc::clone(&self.round), self.signal_capacity)
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply(&mut self, stamped: StampedSignal) {
        let signal = stamped.signal;
        let round = self.round.load(Ordering::Acquire);

        if signal != SessionSignal::PlayPressed && stamped.round < round {
            trace!("Discarding {:?} from round {} in round {}", signal, stamped.round, round);
            return;
        }

        match signal {
            SessionSignal::PlayPressed => self.start_game(),
            SessionSignal::PlayerDied => self.end_game(),
            SessionSignal::ObstaclePassed => self.increase_score(),
        }
    }

    fn pause(&mut self) {
        self.clock.freeze();
        self.player.set_enabled(false);
    }

    fn resume(&mut self) {
        self.clock.resume();
        self.player.set_enabled(true);
    }

    fn push_score(&mut self) {
        self.score_display.set(&self.score.to_string());
    }

    fn clear_obstacles(&mut self) {
        let stale = self.obstacles.snapshot();
        if stale.is_empty() {
            return;
        }

        debug!("Destroying {} obstacles from previous round", stale.len());
        for id in stale {
            self.obstacles.destroy(id);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
