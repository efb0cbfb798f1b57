use super::error::MoveError;
use super::notation;
use super::{
    Board, MoveOutcome, Piece, PieceKind, Position, SpecialMove, SpecialMoveKind,
    SpecialMoveOutcome,
};

impl Board {
    /// Moves the occupant of `from` to `to`, capturing whatever stood there.
    ///
    /// Legality is not checked here; the caller picks moves from the legal
    /// lists. Caches are stale until [`Board::calculate_moves`] runs again.
    /// A pawn reaching the last rank becomes a queen.
    pub fn perform_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        if !to.is_on_board() {
            return Err(MoveError::OutOfBounds { position: to });
        }
        let piece = self.mover_at(from)?;

        let captured = self.piece_at(to);
        let promotion = (piece.kind() == PieceKind::Pawn
            && to.y() == piece.color().opponent().back_rank())
        .then_some(PieceKind::Queen);
        let notation = notation::ordinary(piece, from, to, captured.is_some(), promotion);

        self.relocate(from, to);
        if let Some(kind) = promotion {
            self.set_piece(to, piece.promoted(kind));
        }

        log::debug!("{} {from}-{to} ({notation})", piece);
        Ok(MoveOutcome {
            notation,
            captured,
            promotion,
        })
    }

    /// Executes a castle, en passant or double step for the piece on `from`.
    ///
    /// The move is validated against the moving piece before anything is
    /// touched.
    pub fn perform_special_move(
        &mut self,
        from: Position,
        mv: &SpecialMove,
    ) -> Result<SpecialMoveOutcome, MoveError> {
        if !mv.to.is_on_board() {
            return Err(MoveError::OutOfBounds { position: mv.to });
        }
        let piece = self.mover_at(from)?;
        if piece.kind() != mv.kind.mover() {
            return Err(MoveError::WrongMover {
                kind: mv.kind,
                found: piece.kind(),
            });
        }

        let outcome = match mv.kind {
            SpecialMoveKind::Castle => {
                let rook = self.involved_piece(mv)?;
                let step = (mv.to.x() - from.x()).signum();
                let rook_to = mv.to.offset(-step, 0);
                self.relocate(from, mv.to);
                self.relocate(rook, rook_to);
                SpecialMoveOutcome {
                    notation: notation::castle(step > 0),
                    secondary: Some(rook_to),
                }
            }
            SpecialMoveKind::EnPassant => {
                let captured = self.involved_piece(mv)?;
                self.relocate(from, mv.to);
                self.remove_piece(captured);
                SpecialMoveOutcome {
                    notation: notation::ordinary(piece, from, mv.to, true, None),
                    secondary: Some(captured),
                }
            }
            SpecialMoveKind::DoubleStep => {
                self.relocate(from, mv.to);
                if let Some(square) = self.square_mut(mv.to) {
                    if let Some(pawn) = square.occupant.as_mut() {
                        pawn.mark_double_step();
                    }
                }
                SpecialMoveOutcome {
                    notation: notation::ordinary(piece, from, mv.to, false, None),
                    secondary: None,
                }
            }
        };

        log::debug!("{} {} {from}-{} ({})", piece, mv.kind, mv.to, outcome.notation);
        Ok(outcome)
    }

    fn mover_at(&self, from: Position) -> Result<Piece, MoveError> {
        let square = self
            .square_at(from)
            .ok_or(MoveError::OutOfBounds { position: from })?;
        square
            .occupant
            .ok_or(MoveError::EmptySquare { position: from })
    }

    fn involved_piece(&self, mv: &SpecialMove) -> Result<Position, MoveError> {
        let pos = mv
            .involved
            .ok_or(MoveError::MissingInvolvedPosition { kind: mv.kind })?;
        self.mover_at(pos)?;
        Ok(pos)
    }

    /// Transfers the occupant of `from` to `to` and marks it as moved.
    fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let mut piece = self.remove_piece(from)?;
        piece.mark_moved();
        self.set_piece(to, piece)
    }
}
