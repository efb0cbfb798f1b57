//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, PieceKind, Position, SpecialMoveKind};

/// Error type for coordinate parsing and conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Coordinates outside 0-7
    OutOfBounds { x: i32, y: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfBounds { x, y } => {
                write!(f, "Position ({x}, {y}) out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for rejected move requests. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Position outside the board
    OutOfBounds { position: Position },
    /// No piece on the origin square
    EmptySquare { position: Position },
    /// Special move kind does not belong to the piece on the origin square
    WrongMover {
        kind: SpecialMoveKind,
        found: PieceKind,
    },
    /// Castling or en passant without its secondary position
    MissingInvolvedPosition { kind: SpecialMoveKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { position } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the board",
                    position.x(),
                    position.y()
                )
            }
            MoveError::EmptySquare { position } => {
                write!(f, "No piece on {position}")
            }
            MoveError::WrongMover { kind, found } => {
                write!(f, "A {found:?} cannot perform {kind}")
            }
            MoveError::MissingInvolvedPosition { kind } => {
                write!(f, "{kind} requires an involved position")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for piece layouts that break the one-king-per-color rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Each color must have exactly one king
    KingCount { color: Color, found: usize },
    /// Two pieces placed on the same square
    Occupied { position: Position },
    /// Piece placed outside the board
    OutOfBounds { position: Position },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            LayoutError::Occupied { position } => {
                write!(f, "Square {position} is already occupied")
            }
            LayoutError::OutOfBounds { position } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the board",
                    position.x(),
                    position.y()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for snapshot parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Occupancy string must hold exactly 64 cells
    InvalidLength { len: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Side-to-move tag missing
    MissingSideToMove,
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Decoded occupancy is not a playable layout
    Layout(LayoutError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::InvalidLength { len } => {
                write!(f, "Snapshot must have 64 cells, found {len}")
            }
            SnapshotError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in snapshot")
            }
            SnapshotError::MissingSideToMove => write!(f, "Snapshot has no side to move"),
            SnapshotError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            SnapshotError::Layout(e) => write!(f, "Invalid snapshot layout: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for SnapshotError {
    fn from(e: LayoutError) -> Self {
        SnapshotError::Layout(e)
    }
}
