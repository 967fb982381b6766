//=========================================================================
// Session State
//=========================================================================
//
// Finite-state machine for a single arcade session.
//
// Transition table:
//   Menu     ──StartGame──> Playing
//   Playing  ──EndGame────> GameOver
//   GameOver ──StartGame──> Playing
//
// Every other (state, trigger) pair is rejected. The controller consults
// `SessionState::next` for each trigger, so the table above is the only
// place transitions are defined.
//
//=========================================================================

//=== SessionState ========================================================

/// Phase of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Waiting for the first play request. Simulation frozen.
    #[default]
    Menu,

    /// A round is running. Simulation live, player in control.
    Playing,

    /// The player died. Simulation frozen until the next play request.
    GameOver,
}

//=== SessionTrigger ======================================================

/// Inputs that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionTrigger {
    /// Play button pressed (first round or replay).
    StartGame,

    /// Player died.
    EndGame,
}

impl SessionState {
    /// Returns the state reached by applying `trigger`, or `None` if the
    /// trigger is not valid from this state.
    pub fn next(self, trigger: SessionTrigger) -> Option<SessionState> {
        match (self, trigger) {
            (Self::Menu, SessionTrigger::StartGame) => Some(Self::Playing),
            (Self::GameOver, SessionTrigger::StartGame) => Some(Self::Playing),
            (Self::Playing, SessionTrigger::EndGame) => Some(Self::GameOver),
            _ => None,
        }
    }

    /// Whether the simulation runs in this state.
    pub fn is_running(self) -> bool {
        self == Self::Playing
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
