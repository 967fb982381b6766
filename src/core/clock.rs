//=========================================================================
// Simulation Clock
//=========================================================================
//
// Owns the simulation time scale.
//
// Architecture:
//   SimulationClock (sole writer, owned by SessionController)
//         │
//         └──reader()──> TimeScale (cloned into player, obstacles, ...)
//
// The scale is stored as f32 bits in an atomic so readers can be handed
// to collaborators living outside the session without a lock.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

//=== Constants ===========================================================

/// Scale applied while the simulation runs.
pub const RUNNING: f32 = 1.0;

/// Scale applied while the simulation is frozen.
pub const STOPPED: f32 = 0.0;

//=== TimeScale ===========================================================

/// Read-only view of the simulation time scale.
///
/// Cheap to clone. Entities that advance their own motion multiply frame
/// time by [`TimeScale::get`] or call [`TimeScale::scale`].
#[derive(Debug, Clone)]
pub struct TimeScale {
    bits: Arc<AtomicU32>,
}

impl TimeScale {
    /// Current time scale.
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Whether the simulation is frozen.
    pub fn is_stopped(&self) -> bool {
        self.get() == STOPPED
    }

    /// Scales a frame delta by the current time scale.
    pub fn scale(&self, dt: Duration) -> Duration {
        let scale = self.get();
        if scale == RUNNING {
            dt
        } else {
            dt.mul_f64(f64::from(scale))
        }
    }
}

//=== SimulationClock =====================================================

/// Writer side of the simulation time scale.
///
/// Not `Clone`: holding a `SimulationClock` is what makes its owner the
/// only component able to pause or resume the simulation.
#[derive(Debug)]
pub struct SimulationClock {
    bits: Arc<AtomicU32>,
}

impl SimulationClock {
    /// Creates a clock in the running state.
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(RUNNING.to_bits())),
        }
    }

    /// Returns a reader sharing this clock's scale.
    pub fn reader(&self) -> TimeScale {
        TimeScale {
            bits: Arc::clone(&self.bits),
        }
    }

    pub fn freeze(&mut self) {
        self.set(STOPPED);
    }

    pub fn resume(&mut self) {
        self.set(RUNNING);
    }

    pub fn is_stopped(&self) -> bool {
        f32::from_bits(self.bits.load(Ordering::Acquire)) == STOPPED
    }

    fn set(&mut self, scale: f32) {
        self.bits.store(scale.to_bits(), Ordering::Release);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
