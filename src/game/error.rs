use std::fmt;

use crate::board::{MoveError, Position, SnapshotError, SpecialMove};

use super::GameState;

/// Error type for rejected game commands. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No moves are accepted once the game is decided
    GameOver { state: GameState },
    /// Destination not among the legal moves of the side to move
    IllegalMove { from: Position, to: Position },
    /// Special move not among the legal special moves of the side to move
    IllegalSpecialMove { from: Position, mv: SpecialMove },
    /// History is empty
    NothingToRollback,
    Move(MoveError),
    Snapshot(SnapshotError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver { state } => write!(f, "The game is over ({state})"),
            GameError::IllegalMove { from, to } => write!(f, "Illegal move {from} {to}"),
            GameError::IllegalSpecialMove { from, mv } => {
                write!(f, "Illegal {} from {from} to {}", mv.kind, mv.to)
            }
            GameError::NothingToRollback => write!(f, "No moves to take back"),
            GameError::Move(e) => write!(f, "{e}"),
            GameError::Snapshot(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

impl From<SnapshotError> for GameError {
    fn from(e: SnapshotError) -> Self {
        GameError::Snapshot(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_display() {
        let err = GameError::GameOver {
            state: GameState::BlackWin,
        };
        assert_eq!(err.to_string(), "The game is over (black wins)");
    }

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::IllegalMove {
            from: "e2".parse().unwrap(),
            to: "e5".parse().unwrap(),
        };
        assert_eq!(err.to_string(), "Illegal move e2 e5");
    }

    #[test]
    fn test_wrapped_errors_have_source() {
        use std::error::Error;
        let err: GameError = SnapshotError::MissingSideToMove.into();
        assert!(err.source().is_some());
        assert!(GameError::NothingToRollback.source().is_none());
    }
}
