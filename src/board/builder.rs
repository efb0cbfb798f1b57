//! Fluent builder for constructing positions piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(4, 0), PieceKind::King, Color::White)
//!     .piece(Position::new(4, 7), PieceKind::King, Color::Black)
//!     .piece(Position::new(0, 1), PieceKind::Pawn, Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.legal_moves(Color::White, Position::new(0, 1)).len(), 1);
//! ```

use super::error::LayoutError;
use super::{Board, Color, Piece, PieceKind, Position};

/// Marks a piece as moved unless it stands where the standard setup puts
/// pieces of its kind. Applies only to the kinds whose special moves depend
/// on the flag.
pub(crate) fn settle(mut piece: Piece, pos: Position) -> Piece {
    let rank = piece.color().back_rank();
    let at_home = match piece.kind() {
        PieceKind::Pawn => pos.y() == rank + piece.color().pawn_direction(),
        PieceKind::King => pos == Position::new(4, rank),
        PieceKind::Rook => pos == Position::new(0, rank) || pos == Position::new(7, rank),
        _ => true,
    };
    if !at_home {
        piece.mark_moved();
    }
    piece
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut builder = Self::new();
        for (file, &kind) in back_rank.iter().enumerate() {
            let x = file as i32;
            builder = builder
                .piece(Position::new(x, 0), kind, Color::White)
                .piece(Position::new(x, 1), PieceKind::Pawn, Color::White)
                .piece(Position::new(x, 6), PieceKind::Pawn, Color::Black)
                .piece(Position::new(x, 7), kind, Color::Black);
        }
        builder
    }

    /// Place a piece. Kings, rooks and pawns away from their home squares
    /// count as moved.
    #[must_use]
    pub fn piece(mut self, pos: Position, kind: PieceKind, color: Color) -> Self {
        self.pieces.push((pos, settle(Piece::new(kind, color), pos)));
        self
    }

    /// Place a piece that has already moved, wherever it stands.
    #[must_use]
    pub fn moved_piece(mut self, pos: Position, kind: PieceKind, color: Color) -> Self {
        let mut piece = Piece::new(kind, color);
        piece.mark_moved();
        self.pieces.push((pos, piece));
        self
    }

    /// Place a pawn that just made a double step, so it can be taken en
    /// passant.
    #[must_use]
    pub fn double_stepped_pawn(mut self, pos: Position, color: Color) -> Self {
        let mut pawn = Piece::new(PieceKind::Pawn, color);
        pawn.mark_double_step();
        self.pieces.push((pos, pawn));
        self
    }

    /// Remove every piece placed on `pos`.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(placed, _)| *placed != pos);
        self
    }

    /// Build the board and calculate its moves.
    ///
    /// Fails on off-board or doubly occupied squares, and unless each color
    /// has exactly one king.
    pub fn build(self) -> Result<Board, LayoutError> {
        let mut board = Board::empty();

        for (pos, piece) in self.pieces {
            if !pos.is_on_board() {
                return Err(LayoutError::OutOfBounds { position: pos });
            }
            if board.set_piece(pos, piece).is_some() {
                return Err(LayoutError::Occupied { position: pos });
            }
        }

        for color in Color::BOTH {
            let found = board
                .occupied()
                .filter(|(_, piece)| piece.is(PieceKind::King, color))
                .count();
            if found != 1 {
                return Err(LayoutError::KingCount { color, found });
            }
        }

        board.calculate_moves();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        let standard = Board::new();

        assert_eq!(
            built.create_snapshot(Color::White),
            standard.create_snapshot(Color::White)
        );
        assert_eq!(built.count_legal_moves(Color::White), 20);
    }

    #[test]
    fn test_kings_only() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), PieceKind::King, Color::White)
            .piece(sq("e8"), PieceKind::King, Color::Black)
            .build()
            .unwrap();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e8")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
    }

    #[test]
    fn test_missing_king() {
        let result = BoardBuilder::new()
            .piece(sq("e1"), PieceKind::King, Color::White)
            .build();
        assert_eq!(
            result.unwrap_err(),
            LayoutError::KingCount {
                color: Color::Black,
                found: 0
            }
        );
    }

    #[test]
    fn test_two_kings_of_one_color() {
        let result = BoardBuilder::new()
            .piece(sq("e1"), PieceKind::King, Color::White)
            .piece(sq("d1"), PieceKind::King, Color::White)
            .piece(sq("e8"), PieceKind::King, Color::Black)
            .build();
        assert_eq!(
            result.unwrap_err(),
            LayoutError::KingCount {
                color: Color::White,
                found: 2
            }
        );
    }

    #[test]
    fn test_occupied_and_out_of_bounds() {
        let doubled = BoardBuilder::new()
            .piece(sq("e1"), PieceKind::King, Color::White)
            .piece(sq("e1"), PieceKind::Queen, Color::White)
            .build();
        assert_eq!(
            doubled.unwrap_err(),
            LayoutError::Occupied {
                position: sq("e1")
            }
        );

        let outside = BoardBuilder::new()
            .piece(Position::new(8, 0), PieceKind::Rook, Color::White)
            .build();
        assert_eq!(
            outside.unwrap_err(),
            LayoutError::OutOfBounds {
                position: Position::new(8, 0)
            }
        );
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_pieces_off_home_squares_count_as_moved() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(!settle(pawn, sq("c2")).has_moved());
        assert!(settle(pawn, sq("c4")).has_moved());

        let king = Piece::new(PieceKind::King, Color::Black);
        assert!(!settle(king, sq("e8")).has_moved());
        assert!(settle(king, sq("e1")).has_moved());

        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert!(!settle(knight, sq("d5")).has_moved());
    }
}
