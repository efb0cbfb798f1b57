pub mod board;
pub mod cli;
pub mod game;
pub mod history;

pub use board::{Board, Color, Piece, PieceKind, Position, Snapshot, SpecialMove};
pub use game::{Game, GameEvent, GameState, SharedGame};
pub use history::{History, HistoryEntry};
