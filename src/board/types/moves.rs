//! Special moves and move results.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::position::Position;

/// Moves with an effect beyond relocating one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMoveKind {
    /// King moves two files toward a rook, which jumps to the crossed square
    Castle,
    /// Pawn captures an adjacent enemy pawn that has double-stepped
    EnPassant,
    /// Pawn's first move, two ranks forward
    DoubleStep,
}

impl SpecialMoveKind {
    /// The piece kind allowed to execute this move
    #[must_use]
    pub const fn mover(self) -> PieceKind {
        match self {
            SpecialMoveKind::Castle => PieceKind::King,
            SpecialMoveKind::EnPassant | SpecialMoveKind::DoubleStep => PieceKind::Pawn,
        }
    }
}

impl fmt::Display for SpecialMoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialMoveKind::Castle => write!(f, "castle"),
            SpecialMoveKind::EnPassant => write!(f, "en passant"),
            SpecialMoveKind::DoubleStep => write!(f, "double step"),
        }
    }
}

/// A special move: destination of the moving piece plus the secondary square
/// it involves (the castling rook, the pawn captured en passant).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialMove {
    pub kind: SpecialMoveKind,
    pub to: Position,
    pub involved: Option<Position>,
}

impl SpecialMove {
    #[inline]
    #[must_use]
    pub const fn castle(to: Position, rook: Position) -> Self {
        SpecialMove {
            kind: SpecialMoveKind::Castle,
            to,
            involved: Some(rook),
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(to: Position, captured: Position) -> Self {
        SpecialMove {
            kind: SpecialMoveKind::EnPassant,
            to,
            involved: Some(captured),
        }
    }

    #[inline]
    #[must_use]
    pub const fn double_step(to: Position) -> Self {
        SpecialMove {
            kind: SpecialMoveKind::DoubleStep,
            to,
            involved: None,
        }
    }
}

/// Result of [`Board::perform_move`](crate::board::Board::perform_move).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Notation without check or mate markers
    pub notation: String,
    pub captured: Option<Piece>,
    /// Set when a pawn reached the last rank
    pub promotion: Option<PieceKind>,
}

/// Result of [`Board::perform_special_move`](crate::board::Board::perform_special_move).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialMoveOutcome {
    /// Notation without check or mate markers
    pub notation: String,
    /// Square affected besides origin and destination: the rook's new square
    /// after castling, the emptied square after en passant.
    pub secondary: Option<Position>,
}
