//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_session::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session facade
pub use crate::session::{SessionBuilder, SessionController, SessionHost};

// Errors
pub use crate::error::{Collaborator, SessionError};

// State machine
pub use crate::core::state::{SessionState, SessionTrigger};

// Collaborator interfaces
pub use crate::core::collaborators::{ObstacleId, ObstacleRegistry, PlayerControl, TextSink, Visibility};

// Audio
pub use crate::core::audio::{AudioChannel, AudioClip, AudioCues, BackgroundTrack};

// Signals and time
pub use crate::core::clock::TimeScale;
pub use crate::core::signals::{SessionHandle, SessionSignal};
