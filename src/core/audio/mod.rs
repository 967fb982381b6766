//=========================================================================
// Audio Cues
//=========================================================================
//
// Single-channel audio output driven by session state.
//
// Architecture:
//   SessionController
//     └─ AudioDirector
//          ├─ channel: Option<Box<dyn AudioChannel>>
//          └─ cues: AudioCues { menu, game, death }
//
// Callers never choose clips. The controller asks the director for a
// background track or the death sound, and the director maps that onto
// the configured clips.
//
//=========================================================================

//=== Module Declarations =================================================

mod director;

//=== Public API ==========================================================

pub(crate) use director::AudioDirector;
pub use director::BackgroundTrack;

//=== AudioClip ===========================================================

/// Identifier of a loaded sound asset.
///
/// The channel implementation resolves the name to actual sample data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioClip {
    name: String,
}

impl AudioClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//=== AudioCues ===========================================================

/// Clips the session plays. Any of them may be left unset; the matching
/// cue is then logged as a configuration error and skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioCues {
    /// Looping track for the menu screen.
    pub menu_music: Option<AudioClip>,

    /// Looping track for gameplay.
    pub game_music: Option<AudioClip>,

    /// One-shot played when the player dies.
    pub death_sound: Option<AudioClip>,
}

//=== AudioChannel ========================================================

/// One audio output supporting a looping clip plus one-shot overlays.
///
/// `play_one_shot` must not replace the clip selected by `set_clip`.
pub trait AudioChannel {
    /// Selects the clip used by `play`.
    fn set_clip(&mut self, clip: &AudioClip);

    /// Whether `play` loops the selected clip.
    fn set_looping(&mut self, looping: bool);

    /// Starts the selected clip from the beginning.
    fn play(&mut self);

    /// Stops the selected clip. One-shots already playing may finish.
    fn stop(&mut self);

    /// Plays `clip` once, layered over whatever the channel is doing.
    fn play_one_shot(&mut self, clip: &AudioClip);

    /// Whether anything is audible on this channel.
    fn is_playing(&self) -> bool;
}
