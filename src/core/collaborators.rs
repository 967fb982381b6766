//=========================================================================
// Collaborator Interfaces
//=========================================================================
//
// Capabilities the session needs from the rest of the game.
//
// The session never owns player, UI or obstacle lifetimes. It drives them
// through these traits, so any concrete layer (engine entities, a TUI,
// the in-memory `headless` types) can be plugged in.
//
//=========================================================================

//=== PlayerControl =======================================================

/// Enable/disable switch for the player-movement entity.
///
/// The player reports its own death through a
/// [`SessionHandle`](crate::core::signals::SessionHandle).
pub trait PlayerControl {
    fn set_enabled(&mut self, enabled: bool);
}

//=== TextSink ============================================================

/// Text surface the score is pushed to.
pub trait TextSink {
    fn set(&mut self, text: &str);
}

//=== Visibility ==========================================================

/// Show/hide toggle for a UI element (play button, game-over panel).
pub trait Visibility {
    fn show(&mut self);
    fn hide(&mut self);
}

//=== ObstacleRegistry ====================================================

/// Opaque handle to a live obstacle entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u64);

/// External registry of live obstacle entities.
///
/// The session takes a snapshot at the start of every round and destroys
/// each entry. Spawning stays with the registry's owner.
pub trait ObstacleRegistry {
    /// Handles of all obstacles alive right now.
    fn snapshot(&self) -> Vec<ObstacleId>;

    /// Destroys one obstacle. Unknown ids are ignored.
    fn destroy(&mut self, id: ObstacleId);
}
