//=========================================================================
// Headless Collaborators
//=========================================================================
//
// In-memory implementations of every collaborator interface.
//
// Each type is a cheap `Clone` over shared state: hand one clone to the
// session builder and keep another to observe what the session did. Used
// by the scripted demo binary and by the unit tests; also handy for
// server-side replays where nothing is rendered or heard.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::audio::{AudioChannel, AudioClip};
use crate::core::collaborators::{ObstacleId, ObstacleRegistry, PlayerControl, TextSink, Visibility};

//=== Toggle ==============================================================

/// Visibility flag that counts how often it actually changed.
#[derive(Debug, Clone, Default)]
pub struct Toggle {
    visible: Rc<Cell<bool>>,
    changes: Rc<Cell<usize>>,
}

impl Toggle {
    pub fn new(visible: bool) -> Self {
        Self {
            visible: Rc::new(Cell::new(visible)),
            changes: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Number of show/hide calls that flipped the flag.
    pub fn changes(&self) -> usize {
        self.changes.get()
    }

    fn set(&self, visible: bool) {
        if self.visible.replace(visible) != visible {
            self.changes.set(self.changes.get() + 1);
        }
    }
}

impl Visibility for Toggle {
    fn show(&mut self) {
        self.set(true);
    }

    fn hide(&mut self) {
        self.set(false);
    }
}

//=== TextLabel ===========================================================

/// Text sink remembering the last value and the number of pushes.
#[derive(Debug, Clone, Default)]
pub struct TextLabel {
    text: Rc<RefCell<String>>,
    pushes: Rc<Cell<usize>>,
}

impl TextLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn pushes(&self) -> usize {
        self.pushes.get()
    }
}

impl TextSink for TextLabel {
    fn set(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
        self.pushes.set(self.pushes.get() + 1);
    }
}

//=== PlayerSwitch ========================================================

/// Player control flag.
#[derive(Debug, Clone, Default)]
pub struct PlayerSwitch {
    enabled: Rc<Cell<bool>>,
}

impl PlayerSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Rc::new(Cell::new(enabled)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl PlayerControl for PlayerSwitch {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

//=== ObstacleField =======================================================

/// Registry of live obstacles with sequential ids.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    live: Rc<RefCell<BTreeSet<ObstacleId>>>,
    next_id: Rc<Cell<u64>>,
    destroyed: Rc<Cell<usize>>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new live obstacle and returns its id.
    pub fn spawn(&self) -> ObstacleId {
        let id = ObstacleId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.live.borrow_mut().insert(id);
        id
    }

    pub fn len(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.borrow().is_empty()
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.live.borrow().contains(&id)
    }

    /// Total obstacles destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }
}

impl ObstacleRegistry for ObstacleField {
    fn snapshot(&self) -> Vec<ObstacleId> {
        self.live.borrow().iter().copied().collect()
    }

    fn destroy(&mut self, id: ObstacleId) {
        if self.live.borrow_mut().remove(&id) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }
}

//=== RecordingChannel ====================================================

/// Operation received by a [`RecordingChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    SetClip(String),
    SetLooping(bool),
    Play,
    Stop,
    PlayOneShot(String),
}

#[derive(Debug, Default)]
struct ChannelState {
    calls: Vec<AudioCall>,
    clip: Option<String>,
    looping: bool,
    playing: bool,
    one_shot_active: bool,
    one_shots: Vec<String>,
}

/// Audio channel that records every call and models playback state
/// without producing sound.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    state: Rc<RefCell<ChannelState>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Name of the clip selected for looping playback.
    pub fn current_clip(&self) -> Option<String> {
        self.state.borrow().clip.clone()
    }

    pub fn is_looping(&self) -> bool {
        let state = self.state.borrow();
        state.playing && state.looping
    }

    /// Names of all one-shots played so far, in order.
    pub fn one_shots(&self) -> Vec<String> {
        self.state.borrow().one_shots.clone()
    }

    /// Simulates every sound on the channel running out.
    pub fn finish_playback(&self) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.one_shot_active = false;
    }
}

impl AudioChannel for RecordingChannel {
    fn set_clip(&mut self, clip: &AudioClip) {
        let mut state = self.state.borrow_mut();
        state.calls.push(AudioCall::SetClip(clip.name().to_owned()));
        state.clip = Some(clip.name().to_owned());
    }

    fn set_looping(&mut self, looping: bool) {
        let mut state = self.state.borrow_mut();
        state.calls.push(AudioCall::SetLooping(looping));
        state.looping = looping;
    }

    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(AudioCall::Play);
        state.playing = state.clip.is_some();
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(AudioCall::Stop);
        state.playing = false;
    }

    fn play_one_shot(&mut self, clip: &AudioClip) {
        let mut state = self.state.borrow_mut();
        state.calls.push(AudioCall::PlayOneShot(clip.name().to_owned()));
        state.one_shots.push(clip.name().to_owned());
        state.one_shot_active = true;
    }

    fn is_playing(&self) -> bool {
        let state = self.state.borrow();
        state.playing || state.one_shot_active
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
