//=========================================================================
// Signal Interface
//=========================================================================
//
// Collaborator-to-session contract (signals and the sending handle).
//
// Every signal is stamped with the round it was sent in. The controller
// bumps the round on each start, so anything still queued from an earlier
// round can be told apart from the current one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use log::{debug, warn};

//=== SessionSignal =======================================================

/// Notifications collaborators send to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSignal {
    /// The play button was pressed.
    PlayPressed,

    /// The player collided with something and died.
    PlayerDied,

    /// An obstacle met its scoring condition (e.g. passed the player).
    ObstaclePassed,
}

impl SessionSignal {
    /// Whether the signal is subject to the inbox capacity.
    ///
    /// Only points are. Play presses and deaths drive transitions and are
    /// always queued.
    pub fn is_droppable(self) -> bool {
        self == Self::ObstaclePassed
    }
}

//=== StampedSignal =======================================================

/// Signal tagged with the round number current when it was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StampedSignal {
    pub(crate) signal: SessionSignal,
    pub(crate) round: u64,
}

//=== SessionHandle =======================================================

/// Cloneable sender handed to collaborators.
///
/// Sending never blocks. Once `capacity` signals are waiting for the next
/// tick, further points are logged and dropped; play presses and deaths
/// are still queued. The return value tells whether the signal was queued.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: Sender<StampedSignal>,
    round: Arc<AtomicU64>,
    capacity: usize,
}

impl SessionHandle {
    pub(crate) fn new(
        sender: Sender<StampedSignal>,
        round: Arc<AtomicU64>,
        capacity: usize,
    ) -> Self {
        Self {
            sender,
            round,
            capacity,
        }
    }

    /// Reports a play-button press.
    pub fn request_start(&self) -> bool {
        self.send(SessionSignal::PlayPressed)
    }

    /// Reports the player's death.
    pub fn report_death(&self) -> bool {
        self.send(SessionSignal::PlayerDied)
    }

    /// Reports a scoring event.
    pub fn report_score(&self) -> bool {
        self.send(SessionSignal::ObstaclePassed)
    }

    pub fn send(&self, signal: SessionSignal) -> bool {
        if signal.is_droppable() && self.sender.len() >= self.capacity {
            warn!("Session inbox full, dropping {:?}", signal);
            return false;
        }

        let stamped = StampedSignal {
            signal,
            round: self.round.load(Ordering::Acquire),
        };

        match self.sender.send(stamped) {
            Ok(()) => true,
            Err(_) => {
                debug!("Session no longer active, dropping {:?}", signal);
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
