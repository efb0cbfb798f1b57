//! Structured results handed back by every mutating game call.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece, PieceKind, Position};

/// Result notations appended once the game is decided
pub const WHITE_WIN: &str = "1-0";
pub const BLACK_WIN: &str = "0-1";
pub const DRAW: &str = "\u{bd}\u{2013}\u{bd}";

/// Where the game stands after the latest ply.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// The game is on
    Ready,
    Stalemate,
    WhiteWin,
    BlackWin,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Ready)
    }

    /// The win for `color`
    #[must_use]
    pub const fn win_for(color: Color) -> GameState {
        match color {
            Color::White => GameState::WhiteWin,
            Color::Black => GameState::BlackWin,
        }
    }

    /// Result notation once the game is over
    #[must_use]
    pub const fn result(self) -> Option<&'static str> {
        match self {
            GameState::Ready => None,
            GameState::Stalemate => Some(DRAW),
            GameState::WhiteWin => Some(WHITE_WIN),
            GameState::BlackWin => Some(BLACK_WIN),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Ready => write!(f, "ready"),
            GameState::Stalemate => write!(f, "stalemate"),
            GameState::WhiteWin => write!(f, "white wins"),
            GameState::BlackWin => write!(f, "black wins"),
        }
    }
}

/// Content of a square that changed without a piece arriving on it by an
/// ordinary move: a pawn taken en passant, a pawn turned into a queen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareInfo {
    pub position: Position,
    pub piece: Option<(PieceKind, Color)>,
}

impl SquareInfo {
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        SquareInfo {
            position,
            piece: None,
        }
    }

    #[must_use]
    pub const fn occupied(position: Position, kind: PieceKind, color: Color) -> Self {
        SquareInfo {
            position,
            piece: Some((kind, color)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_piece(&self) -> bool {
        self.piece.is_some()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    PieceMoved { from: Position, to: Position },
    SquareUpdated(SquareInfo),
    NextPlayer(Color),
    /// Move text with check or mate marker, or a result such as `1-0`
    Notation(String),
    StateChanged(GameState),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PieceMoved { from, to } => write!(f, "moved {from} {to}"),
            GameEvent::SquareUpdated(info) => match info.piece {
                Some((kind, color)) => {
                    write!(f, "square {} {}", info.position, Piece::new(kind, color))
                }
                None => write!(f, "square {} empty", info.position),
            },
            GameEvent::NextPlayer(color) => {
                write!(f, "next {}", color.to_string().to_lowercase())
            }
            GameEvent::Notation(text) => write!(f, "notation {text}"),
            GameEvent::StateChanged(state) => write!(f, "state {state}"),
        }
    }
}

/// Returned by a committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Move notation including any `+` or `#`
    pub notation: String,
    pub state: GameState,
    pub next_player: Color,
    /// Everything that changed, in order
    pub events: Vec<GameEvent>,
}

/// Returned by [`Game::rollback`](super::Game::rollback).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollbackReport {
    /// Notations of the undone moves, newest first
    pub undone: Vec<String>,
    pub state: GameState,
    pub next_player: Color,
    pub events: Vec<GameEvent>,
}
