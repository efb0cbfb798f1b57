//! Core chess types.
//!
//! - `Position` - board coordinate with offset arithmetic
//! - `Piece`, `PieceKind` and `Color` - pieces and their flags
//! - `SpecialMove` and the move outcome records

mod moves;
mod piece;
mod position;

pub use moves::{MoveOutcome, SpecialMove, SpecialMoveKind, SpecialMoveOutcome};
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, BOARD_SIZE};
