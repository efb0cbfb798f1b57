use super::super::{Board, Piece, PieceKind, Position, SpecialMove};

impl Board {
    /// Both forward diagonals, whatever stands on them.
    pub(crate) fn pawn_reach(&self, from: Position, pawn: Piece) -> Vec<Position> {
        let dir = pawn.color().pawn_direction();
        [from.offset(-1, dir), from.offset(1, dir)]
            .into_iter()
            .filter(|to| to.is_on_board())
            .collect()
    }

    pub(crate) fn generate_pawn_moves(&self, from: Position, pawn: Piece) -> Vec<Position> {
        let mut moves = Vec::new();
        let forward = from.offset(0, pawn.color().pawn_direction());
        if self.is_empty(forward) {
            moves.push(forward);
        }

        for target in self.pawn_reach(from, pawn) {
            if self
                .piece_at(target)
                .is_some_and(|p| p.color() != pawn.color())
            {
                moves.push(target);
            }
        }
        moves
    }

    pub(crate) fn generate_pawn_special_moves(&self, from: Position, pawn: Piece) -> Vec<SpecialMove> {
        let mut moves = Vec::new();
        let dir = pawn.color().pawn_direction();

        let single = from.offset(0, dir);
        let double = from.offset(0, 2 * dir);
        if !pawn.has_moved() && self.is_empty(single) && self.is_empty(double) {
            moves.push(SpecialMove::double_step(double));
        }

        // en passant: no expiry, the neighbour only needs to have double-stepped once
        for side in [-1, 1] {
            let beside = from.offset(side, 0);
            let Some(neighbour) = self.piece_at(beside) else {
                continue;
            };
            if neighbour.kind() != PieceKind::Pawn
                || neighbour.color() == pawn.color()
                || !neighbour.has_double_stepped()
            {
                continue;
            }
            let landing = beside.offset(0, dir);
            if self.is_empty(landing) {
                moves.push(SpecialMove::en_passant(landing, beside));
            }
        }
        moves
    }
}
