//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation, threat index and perft counts
//! - `check.rs` - Checks, checkmate, stalemate and king safety
//! - `pins.rs` - Pinned pieces
//! - `special.rs` - Castling, en passant, double step and promotion
//! - `snapshot.rs` - Snapshot round trips and what they lose
//! - `proptest.rs` - Property-based tests

mod special;

use super::{Board, BoardBuilder, Color, PieceKind, Position, Snapshot, SpecialMove};

fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

/// Destinations as sorted square names
fn names(moves: &[Position]) -> Vec<String> {
    let mut names: Vec<String> = moves.iter().map(ToString::to_string).collect();
    names.sort();
    names
}

/// A builder holding just the two kings
fn kings(white: &str, black: &str) -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq(white), PieceKind::King, Color::White)
        .piece(sq(black), PieceKind::King, Color::Black)
}

fn from_cells(cells: &str, side: Color) -> Board {
    let snapshot = Snapshot::new(cells, side).unwrap();
    Board::from_snapshot(&snapshot).unwrap()
}

/// One legal ply for the side to move
#[derive(Clone, Copy, Debug)]
enum Ply {
    Ordinary(Position, Position),
    Special(Position, SpecialMove),
}

fn legal_plies(board: &Board, color: Color) -> Vec<Ply> {
    let mut plies = Vec::new();
    for (from, _) in board.pieces(color) {
        for &to in board.legal_moves(color, from) {
            plies.push(Ply::Ordinary(from, to));
        }
        for &mv in board.legal_special_moves(color, from) {
            plies.push(Ply::Special(from, mv));
        }
    }
    plies
}

/// The board after `ply`, with moves recalculated
fn apply(board: &Board, ply: Ply) -> Board {
    let mut next = board.clone();
    match ply {
        Ply::Ordinary(from, to) => {
            next.perform_move(from, to).unwrap();
        }
        Ply::Special(from, mv) => {
            next.perform_special_move(from, &mv).unwrap();
        }
    }
    next.calculate_moves();
    next
}

fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let plies = legal_plies(board, color);
    if depth == 1 {
        return plies.len() as u64;
    }
    plies
        .into_iter()
        .map(|ply| perft(&apply(board, ply), color.opponent(), depth - 1))
        .sum()
}
