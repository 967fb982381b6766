//=========================================================================
// Aetheric Session — Library Root
//
// This crate drives the menu → play → death → game-over cycle of a
// single-screen arcade game.
//
// Responsibilities:
// - Expose the session facade (`SessionBuilder`, `SessionHost`,
//   `SessionController`)
// - Define the capability traits the rest of the game implements
//   (player control, UI toggles, score text, obstacles, audio channel)
// - Ship in-memory collaborators for headless runs and tests
//
// Typical usage:
// ```ignore
// use aetheric_session::prelude::*;
//
// let mut host = SessionHost::new();
// host.install(
//     SessionBuilder::new()
//         .with_player(player)
//         .with_score_display(score_label)
//         .with_play_button(play_button)
//         .with_game_over_panel(game_over_panel)
//         .with_obstacles(obstacles)
//         .with_audio_channel(audio),
// )?;
//
// loop {
//     let dt = host.tick(frame_time);
//     // advance the rest of the game by `dt`
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the building blocks of a session: state machine, clock,
// audio cues, signal inbox and the collaborator traits.
//
// `headless` provides shareable in-memory collaborators.
//
pub mod core;
pub mod error;
pub mod headless;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `session` defines the builder, the controller and the host. Its types
// are re-exported below.
//
mod session;

//--- Public Exports ------------------------------------------------------

pub use error::{Collaborator, SessionError};
pub use session::{SessionBuilder, SessionController, SessionHost};
