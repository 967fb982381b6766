//=========================================================================
// Session Errors
//=========================================================================
//
// Setup-time failures of the session.
//
// Runtime misuse (ending a round that is not running, scoring outside a
// round) is not an error; those calls are ignored. Missing audio is logged
// and tolerated. Only structural misconfiguration and duplicate
// activation surface here.
//
//=========================================================================

//=== Collaborator ========================================================

/// Required collaborators of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    Player,
    ScoreDisplay,
    PlayButton,
    GameOverPanel,
    Obstacles,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Player => "player control",
            Self::ScoreDisplay => "score display",
            Self::PlayButton => "play button",
            Self::GameOverPanel => "game-over panel",
            Self::Obstacles => "obstacle registry",
        };
        f.write_str(name)
    }
}

//=== SessionError ========================================================

/// Session setup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A required collaborator was not supplied to the builder.
    MissingCollaborator(Collaborator),

    /// A session is already installed; the new one was discarded.
    AlreadyActive,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCollaborator(c) => write!(f, "Session is missing its {}", c),
            Self::AlreadyActive => write!(f, "A session is already active"),
        }
    }
}

impl std::error::Error for SessionError {}

//=========================================================================
// Unit Tests
//=========================================================================
