//=========================================================================
// Session Core
//
// Building blocks used by the session controller.
//
// Responsibilities:
// - `state`: session phases and the transition table
// - `clock`: simulation time scale (single writer, many readers)
// - `audio`: audio channel contract and state-driven cue selection
// - `signals`: collaborator → session inbox
// - `collaborators`: player, UI and obstacle capability traits
//
// Notes:
// Nothing here loops or blocks. The controller in `crate::session` ties
// these pieces together and is driven by the game's own frame loop.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod clock;
pub mod collaborators;
pub mod signals;
pub mod state;
