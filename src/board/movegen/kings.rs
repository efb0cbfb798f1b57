use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Piece, PieceKind, Position, SpecialMove};

/// Empty squares required between king and rook
const MIN_CORRIDOR: i32 = 2;

impl Board {
    pub(crate) fn king_reach(&self, from: Position) -> Vec<Position> {
        from.index()
            .map(|idx| KING_TARGETS[idx].clone())
            .unwrap_or_default()
    }

    /// Castling candidates: an untouched king and an untouched own rook at
    /// the end of an empty corridor. Threats are checked later, once the
    /// threat index exists.
    pub(crate) fn generate_castling_moves(&self, from: Position, king: Piece) -> Vec<SpecialMove> {
        let mut moves = Vec::new();
        if king.has_moved() {
            return moves;
        }

        for dir in [1, -1] {
            let mut cursor = from.offset(dir, 0);
            let mut corridor = 0;
            while self.is_empty(cursor) {
                corridor += 1;
                cursor = cursor.offset(dir, 0);
            }
            let Some(rook) = self.piece_at(cursor) else {
                continue;
            };
            if corridor >= MIN_CORRIDOR
                && rook.is(PieceKind::Rook, king.color())
                && !rook.has_moved()
            {
                moves.push(SpecialMove::castle(from.offset(2 * dir, 0), cursor));
            }
        }
        moves
    }
}
