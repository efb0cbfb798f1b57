//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i32 = 8;

/// A coordinate on the board: `x` is the file (0 = a), `y` the rank (0 = rank 1).
///
/// Values produced by [`Position::offset`] may lie outside the board; callers
/// check [`Position::is_on_board`] before using them as an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Sentinel meaning "no position".
    pub const INVALID: Position = Position { x: -1, y: -1 };

    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// File, 0-7 when on the board
    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Rank, 0-7 when on the board
    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Shift by `(dx, dy)`. The result is not bounds checked.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Square index (`rank * 8 + file`), or `None` when off the board.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * BOARD_SIZE + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`]. `idx` must be below 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position {
            x: (idx % 8) as i32,
            y: (idx / 8) as i32,
        }
    }

    /// Every on-board position in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }

    /// Unit step from `self` toward `other` when both lie on a shared rank,
    /// file or diagonal.
    #[must_use]
    pub(crate) fn direction_to(self, other: Position) -> Option<(i32, i32)> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx == 0 || dy == 0 || dx.abs() == dy.abs() {
            Some((dx.signum(), dy.signum()))
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::INVALID
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.x as u8 + b'a') as char, self.y + 1)
        } else {
            write!(f, "-")
        }
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = PositionError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        let pos = Position::new(x, y);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(PositionError::OutOfBounds { x, y })
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let x = match bytes[0] {
            b @ b'a'..=b'h' => i32::from(b - b'a'),
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            b @ b'1'..=b'8' => i32::from(b - b'1'),
            _ => return Err(invalid()),
        };
        Ok(Position::new(x, y))
    }
}
