//! Reachability test shared by check, pin and king-safety resolution.

use super::{Board, Piece, PieceKind, Position};

/// Read access to square occupancy.
pub(crate) trait Occupancy {
    fn occupant(&self, pos: Position) -> Option<Piece>;
}

impl Occupancy for Board {
    #[inline]
    fn occupant(&self, pos: Position) -> Option<Piece> {
        self.piece_at(pos)
    }
}

/// The board as it would look after one piece moves and up to one other
/// square is emptied, without touching the board itself.
pub(crate) struct Overlay<'a> {
    board: &'a Board,
    vacated: [Position; 2],
    placed: (Position, Piece),
}

impl<'a> Overlay<'a> {
    pub(crate) fn new(board: &'a Board, from: Position, to: Position, piece: Piece) -> Self {
        Overlay {
            board,
            vacated: [from, Position::INVALID],
            placed: (to, piece),
        }
    }

    #[must_use]
    pub(crate) fn vacate(mut self, pos: Position) -> Self {
        self.vacated[1] = pos;
        self
    }
}

impl Occupancy for Overlay<'_> {
    fn occupant(&self, pos: Position) -> Option<Piece> {
        if pos == self.placed.0 {
            Some(self.placed.1)
        } else if self.vacated.contains(&pos) {
            None
        } else {
            self.board.piece_at(pos)
        }
    }
}

impl Piece {
    /// Whether this piece, standing on `from`, reaches `to` along a line that
    /// passes through `go_through` and crosses at most `depth` occupied squares.
    ///
    /// The line's points run from `from` (inclusive) to `to` (exclusive), so
    /// passing `from` as `go_through` places no constraint. Knights, kings and
    /// pawn captures have no intermediate points. `depth` 0 asks for an open
    /// line (a check); `depth` 1 allows one blocker (a pin).
    pub(crate) fn can_attack<O: Occupancy + ?Sized>(
        self,
        board: &O,
        from: Position,
        to: Position,
        go_through: Position,
        depth: usize,
    ) -> bool {
        if from == to || !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        match self.kind() {
            PieceKind::Knight => {
                go_through == from && matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
            }
            PieceKind::King => go_through == from && dx.abs() <= 1 && dy.abs() <= 1,
            PieceKind::Pawn => {
                go_through == from && dy == self.color().pawn_direction() && dx.abs() == 1
            }
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                self.ray_reaches(board, from, to, go_through, depth)
            }
        }
    }

    fn ray_reaches<O: Occupancy + ?Sized>(
        self,
        board: &O,
        from: Position,
        to: Position,
        go_through: Position,
        depth: usize,
    ) -> bool {
        let Some(step) = from.direction_to(to) else {
            return false;
        };
        if !self.kind().directions().contains(&step) {
            return false;
        }

        let mut passed = go_through == from;
        let mut crossed = 0;
        let mut cursor = from.offset(step.0, step.1);
        while cursor != to {
            if cursor == go_through {
                passed = true;
            }
            if board.occupant(cursor).is_some() {
                crossed += 1;
                if crossed > depth {
                    return false;
                }
            }
            cursor = cursor.offset(step.0, step.1);
        }
        passed
    }
}
