//! Chess board representation and rules.
//!
//! The board is an array of 64 squares, each caching the origins that
//! threaten it and the legal moves of its occupant. Every ply the caches are
//! rebuilt wholesale by [`Board::calculate_moves`]: pseudo-legal generation,
//! the threat index, then legality filtering (checks, pins, king safety,
//! castling and en passant).
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Position};
//!
//! let mut board = Board::new();
//! let e2: Position = "e2".parse().unwrap();
//! assert_eq!(board.legal_moves(Color::White, e2).len(), 1);
//! assert_eq!(board.legal_special_moves(Color::White, e2).len(), 1);
//!
//! board.perform_move(e2, "e3".parse().unwrap()).unwrap();
//! board.calculate_moves();
//! assert!(!board.is_in_check(Color::Black));
//! ```

mod attack;
mod attack_tables;
mod builder;
mod display;
mod error;
mod legality;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, PositionError, SnapshotError};
pub use snapshot::{Snapshot, EMPTY_SQUARE};
pub use state::{Board, Square};
pub use types::{
    Color, MoveOutcome, Piece, PieceKind, Position, SpecialMove, SpecialMoveKind,
    SpecialMoveOutcome, BOARD_SIZE,
};
