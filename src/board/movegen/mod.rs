mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Piece, PieceKind, Position, SpecialMove};

impl Board {
    /// Squares the piece on `from` attacks: its pseudo-legal destinations
    /// plus the squares of friendly pieces it defends, and for pawns both
    /// diagonals regardless of occupancy.
    pub(crate) fn attacked_squares(&self, from: Position, piece: Piece) -> Vec<Position> {
        match piece.kind() {
            PieceKind::Pawn => self.pawn_reach(from, piece),
            PieceKind::Knight => self.knight_reach(from),
            PieceKind::King => self.king_reach(from),
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                self.slider_reach(from, piece.kind().directions())
            }
        }
    }

    /// Destinations geometrically open to the piece, ignoring whether its own
    /// king would be left exposed.
    pub(crate) fn generate_pseudo_moves(&self, from: Position, piece: Piece) -> Vec<Position> {
        if piece.kind() == PieceKind::Pawn {
            return self.generate_pawn_moves(from, piece);
        }
        let mut moves = self.attacked_squares(from, piece);
        moves.retain(|&to| self.piece_at(to).map_or(true, |p| p.color() != piece.color()));
        moves
    }

    pub(crate) fn generate_pseudo_special_moves(
        &self,
        from: Position,
        piece: Piece,
    ) -> Vec<SpecialMove> {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_special_moves(from, piece),
            PieceKind::King => self.generate_castling_moves(from, piece),
            _ => Vec::new(),
        }
    }

    /// Recomputes every square's threat set and legal move caches.
    ///
    /// Runs wholesale each ply: pseudo-legal generation, then the threat
    /// index, then legality filtering against each side's king.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing.
    pub fn calculate_moves(&mut self) {
        for idx in 0..64 {
            let from = Position::from_index(idx);
            let (moves, special_moves) = match self.squares[idx].occupant {
                Some(piece) => (
                    self.generate_pseudo_moves(from, piece),
                    self.generate_pseudo_special_moves(from, piece),
                ),
                None => (Vec::new(), Vec::new()),
            };
            let square = &mut self.squares[idx];
            square.clear_caches();
            square.moves = moves;
            square.special_moves = special_moves;
        }

        for idx in 0..64 {
            let Some(piece) = self.squares[idx].occupant else {
                continue;
            };
            let origin = Position::from_index(idx);
            for target in self.attacked_squares(origin, piece) {
                if let Some(square) = self.square_mut(target) {
                    square.threats.push(origin);
                }
            }
        }

        let kings = Color::BOTH.map(|color| self.find_king(color));

        for idx in 0..64 {
            let Some(piece) = self.squares[idx].occupant else {
                continue;
            };
            let from = Position::from_index(idx);
            let king = kings[piece.color().index()];

            let mut moves = std::mem::take(&mut self.squares[idx].moves);
            let mut special_moves = std::mem::take(&mut self.squares[idx].special_moves);
            self.retain_legal_moves(from, piece, king, &mut moves);
            self.retain_legal_special_moves(from, piece, king, &mut special_moves);
            self.squares[idx].moves = moves;
            self.squares[idx].special_moves = special_moves;
        }

        log::trace!(
            "moves calculated: white {} / black {}, checks: white {} / black {}",
            self.count_legal_moves(Color::White),
            self.count_legal_moves(Color::Black),
            self.is_threatened_by(kings[0], Color::Black),
            self.is_threatened_by(kings[1], Color::White),
        );
    }

    /// Total number of cached legal moves, ordinary and special, for `color`.
    #[must_use]
    pub fn count_legal_moves(&self, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|square| square.occupant.is_some_and(|p| p.color() == color))
            .map(|square| square.moves.len() + square.special_moves.len())
            .sum()
    }
}
