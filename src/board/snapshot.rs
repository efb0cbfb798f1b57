//! Compact occupancy encoding used by history and rollback.
//!
//! A snapshot is 64 cells in index order (a1, b1, ... h8), one letter per
//! piece (White lowercase, Black uppercase, `x` for empty) plus the side to
//! move. Moved flags and double-step flags are not stored: decoding infers
//! "moved" from a piece standing off its home square and clears every
//! double-step flag.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::builder::settle;
use super::error::{LayoutError, SnapshotError};
use super::{Board, Color, Piece, PieceKind, Position};

/// Marker for an empty cell
pub const EMPTY_SQUARE: char = 'x';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    cells: String,
    side_to_move: Color,
}

impl Snapshot {
    /// Validates the cell string: exactly 64 cells, each a piece letter or
    /// the empty marker. King counts are checked when the board is decoded.
    pub fn new(cells: &str, side_to_move: Color) -> Result<Self, SnapshotError> {
        let len = cells.chars().count();
        if len != 64 {
            return Err(SnapshotError::InvalidLength { len });
        }
        if let Some(c) = cells
            .chars()
            .find(|&c| c != EMPTY_SQUARE && PieceKind::from_char(c).is_none())
        {
            return Err(SnapshotError::InvalidPiece { char: c });
        }
        Ok(Snapshot {
            cells: cells.to_string(),
            side_to_move,
        })
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &str {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Decoded occupant of each cell, in index order
    fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.chars().enumerate().filter_map(|(idx, c)| {
            Piece::from_char(c).map(|piece| (Position::from_index(idx), piece))
        })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cells, self.side_to_move.tag())
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let cells = parts.next().unwrap_or_default();
        let tag = parts.next().ok_or(SnapshotError::MissingSideToMove)?;
        let side_to_move = Color::from_tag(tag).ok_or_else(|| SnapshotError::InvalidSideToMove {
            found: tag.to_string(),
        })?;
        Snapshot::new(cells, side_to_move)
    }
}

impl Board {
    /// Encodes occupancy with `next_player` as the side to move.
    #[must_use]
    pub fn create_snapshot(&self, next_player: Color) -> Snapshot {
        let cells = self
            .squares
            .iter()
            .map(|square| square.occupant.map_or(EMPTY_SQUARE, Piece::to_char))
            .collect();
        Snapshot {
            cells,
            side_to_move: next_player,
        }
    }

    /// Rebuilds a board from `snapshot` and calculates its moves.
    ///
    /// Fails if either color does not have exactly one king.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Board, SnapshotError> {
        let mut board = Board::empty();
        for (pos, piece) in snapshot.pieces() {
            board.set_piece(pos, settle(piece, pos));
        }
        for color in Color::BOTH {
            let found = board
                .occupied()
                .filter(|(_, piece)| piece.is(PieceKind::King, color))
                .count();
            if found != 1 {
                return Err(LayoutError::KingCount { color, found }.into());
            }
        }
        board.calculate_moves();
        Ok(board)
    }
}
