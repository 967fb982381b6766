//=========================================================================
// Signal Collector
//=========================================================================
//
// Session-side inbox drain with a per-frame bound.
//
// Architecture:
//   Receiver<StampedSignal> → drain_frame() → Vec<StampedSignal>
//
// Bounded draining keeps a flood of signals from stalling a frame. Any
// remainder stays queued for the next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::interface::StampedSignal;

//=== SignalCollector =====================================================

pub(crate) struct SignalCollector {
    receiver: Receiver<StampedSignal>,
    max_per_frame: usize,
}

impl SignalCollector {
    pub(crate) fn new(receiver: Receiver<StampedSignal>, max_per_frame: usize) -> Self {
        Self {
            receiver,
            max_per_frame,
        }
    }

    /// Takes up to `max_per_frame` pending signals in arrival order.
    pub(crate) fn drain_frame(&mut self) -> Vec<StampedSignal> {
        let mut batch = Vec::new();

        while batch.len() < self.max_per_frame {
            match self.receiver.try_recv() {
                Ok(signal) => batch.push(signal),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if batch.len() == self.max_per_frame && !self.receiver.is_empty() {
            warn!(
                "Signal backlog: drained {} signals this frame, {} still queued",
                batch.len(),
                self.receiver.len()
            );
        }

        batch
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
