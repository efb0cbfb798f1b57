//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(board.has_legal_moves(Color::White));
//! ```

pub use super::{
    Board, BoardBuilder, Color, MoveError, Piece, PieceKind, Position, Snapshot, SnapshotError,
    SpecialMove, SpecialMoveKind,
};
