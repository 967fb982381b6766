//=========================================================================
// Audio Director
//=========================================================================
//
// Maps session-level cues onto the configured channel and clips.
//
// Missing channel or clips are configuration errors. They are logged at
// each attempted cue and otherwise ignored, so the session keeps running
// in silence.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error};

//=== Internal Dependencies ===============================================

use super::{AudioChannel, AudioClip, AudioCues};

//=== BackgroundTrack =====================================================

/// Looping background tracks the session can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundTrack {
    Menu,
    Game,
}

impl AudioCues {
    /// Looping clip configured for `track`.
    pub(crate) fn music(&self, track: BackgroundTrack) -> Option<&AudioClip> {
        match track {
            BackgroundTrack::Menu => self.menu_music.as_ref(),
            BackgroundTrack::Game => self.game_music.as_ref(),
        }
    }
}

//=== AudioDirector =======================================================

pub(crate) struct AudioDirector {
    channel: Option<Box<dyn AudioChannel>>,
    cues: AudioCues,
    current: Option<BackgroundTrack>,
}

impl AudioDirector {
    pub(crate) fn new(channel: Option<Box<dyn AudioChannel>>, cues: AudioCues) -> Self {
        Self {
            channel,
            cues,
            current: None,
        }
    }

    /// Background track currently looping, if any.
    pub(crate) fn current(&self) -> Option<BackgroundTrack> {
        self.current
    }

    /// Whether the channel and the clip for `track` are both configured.
    pub(crate) fn can_play(&self, track: BackgroundTrack) -> bool {
        self.channel.is_some() && self.cues.music(track).is_some()
    }

    /// Whether a configured channel is currently silent.
    pub(crate) fn is_silent(&self) -> bool {
        self.channel.as_ref().is_some_and(|c| !c.is_playing())
    }

    //--- Cues -------------------------------------------------------------

    /// Starts `track` looping, or leaves it alone if it already is.
    pub(crate) fn play_background(&mut self, track: BackgroundTrack) {
        let Self { channel, cues, current } = self;

        let Some(channel) = channel.as_mut() else {
            error!("Audio channel is not configured, cannot play {:?} music", track);
            return;
        };

        if *current == Some(track) && channel.is_playing() {
            debug!("{:?} music already looping", track);
            return;
        }

        let Some(clip) = cues.music(track) else {
            error!("{:?} music clip is not configured", track);
            return;
        };

        debug!("Looping {:?} music ({})", track, clip.name());
        channel.set_clip(clip);
        channel.set_looping(true);
        channel.play();
        *current = Some(track);
    }

    /// Stops the looping track and plays the death one-shot.
    pub(crate) fn play_death_sound(&mut self) {
        let Some(channel) = self.channel.as_mut() else {
            error!("Audio channel is not configured, cannot play death sound");
            return;
        };

        channel.stop();
        self.current = None;

        match self.cues.death_sound.as_ref() {
            Some(clip) => {
                debug!("Playing death sound ({})", clip.name());
                channel.play_one_shot(clip);
            }
            None => error!("Death sound clip is not configured"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{AudioCall, RecordingChannel};

    fn cues() -> AudioCues {
        AudioCues {
            menu_music: Some(AudioClip::new("menu")),
            game_music: Some(AudioClip::new("game")),
            death_sound: Some(AudioClip::new("death")),
        }
    }

    fn director(channel: &RecordingChannel, cues: AudioCues) -> AudioDirector {
        AudioDirector::new(Some(Box::new(channel.clone())), cues)
    }

    #[test]
    fn background_sets_clip_loops_and_plays() {
        let channel = RecordingChannel::new();
        let mut audio = director(&channel, cues());

        audio.play_background(BackgroundTrack::Menu);

        assert_eq!(
            channel.calls(),
            vec![
                AudioCall::SetClip("menu".into()),
                AudioCall::SetLooping(true),
                AudioCall::Play,
            ]
        );
        assert_eq!(audio.current(), Some(BackgroundTrack::Menu));
        assert_eq!(channel.current_clip().as_deref(), Some("menu"));
    }

    #[test]
    fn same_track_continues_without_restart() {
        let channel = RecordingChannel::new();
        let mut audio = director(&channel, cues());

        audio.play_background(BackgroundTrack::Game);
        channel.clear_calls();
        audio.play_background(BackgroundTrack::Game);

        assert!(channel.calls().is_empty());
    }

    #[test]
    fn same_track_restarts_after_silence() {
        let channel = RecordingChannel::new();
        let mut audio = director(&channel, cues());

        audio.play_background(BackgroundTrack::Game);
        channel.finish_playback();
        channel.clear_calls();
        audio.play_background(BackgroundTrack::Game);

        assert_eq!(channel.calls().last(), Some(&AudioCall::Play));
    }

    #[test]
    fn death_sound_stops_loop_then_plays_one_shot() {
        let channel = RecordingChannel::new();
        let mut audio = director(&channel, cues());

        audio.play_background(BackgroundTrack::Game);
        channel.clear_calls();
        audio.play_death_sound();

        assert_eq!(
            channel.calls(),
            vec![AudioCall::Stop, AudioCall::PlayOneShot("death".into())]
        );
        assert_eq!(audio.current(), None);
        assert_eq!(channel.one_shots(), vec!["death".to_string()]);
    }

    #[test]
    fn missing_clip_is_skipped() {
        let channel = RecordingChannel::new();
        let mut audio = director(&channel, AudioCues::default());

        audio.play_background(BackgroundTrack::Menu);
        assert!(channel.calls().is_empty());
        assert_eq!(audio.current(), None);
        assert!(!audio.can_play(BackgroundTrack::Menu));

        audio.play_death_sound();
        assert_eq!(channel.calls(), vec![AudioCall::Stop]);
    }

    #[test]
    fn music_lookup_matches_track() {
        let cues = AudioCues {
            game_music: Some(AudioClip::new("game")),
            ..AudioCues::default()
        };

        assert_eq!(cues.music(BackgroundTrack::Game).map(AudioClip::name), Some("game"));
        assert_eq!(cues.music(BackgroundTrack::Menu), None);
    }

    #[test]
    fn missing_channel_is_silent_noop() {
        let mut audio = AudioDirector::new(None, cues());

        audio.play_background(BackgroundTrack::Game);
        audio.play_death_sound();

        assert_eq!(audio.current(), None);
        assert!(!audio.is_silent());
        assert!(!audio.can_play(BackgroundTrack::Game));
    }
}
