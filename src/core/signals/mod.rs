//=========================================================================
// Session Signals
//=========================================================================
//
// Inbox through which collaborators notify the session.
//
// Architecture:
//   Player / Obstacles / UI ──SessionHandle──> channel (stamped with round)
//                                                    │
//   SessionController::tick() <──SignalCollector─────┘
//
// Collaborators never call into the controller directly. They hold a
// cloneable handle and report what happened; the controller decides what
// it means for the current state when it drains the inbox. Signals
// stamped with an earlier round are discarded there.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use collector::SignalCollector;
pub(crate) use interface::StampedSignal;
pub use interface::{SessionHandle, SessionSignal};
