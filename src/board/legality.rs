//! Legal-move filtering over the per-ply threat index.
//!
//! Pseudo-legal lists are narrowed in place. Removal swaps the rejected entry
//! with the last live one and the list is truncated afterwards, so the order
//! of legal moves is unspecified.

use super::attack::Overlay;
use super::{Board, Color, Piece, PieceKind, Position, SpecialMove, SpecialMoveKind};

/// Keeps the items for which `keep` holds, compacting by swap-remove and
/// truncating once at the end. Survivor order is not preserved.
pub(crate) fn compact<T>(items: &mut Vec<T>, mut keep: impl FnMut(&T) -> bool) {
    let mut len = items.len();
    let mut i = 0;
    while i < len {
        if keep(&items[i]) {
            i += 1;
        } else {
            len -= 1;
            items.swap(i, len);
        }
    }
    items.truncate(len);
}

impl Board {
    /// Enemy origins attacking `king`.
    pub(crate) fn checkers(&self, king: Position, color: Color) -> Vec<Position> {
        self.attackers_of(king, color.opponent())
    }

    fn attackers_of(&self, pos: Position, attacker: Color) -> Vec<Position> {
        self.square_at(pos)
            .map(|square| {
                square
                    .threats
                    .iter()
                    .copied()
                    .filter(|&origin| self.piece_at(origin).is_some_and(|p| p.color() == attacker))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enemy sliders that would see `king` if the piece on `from` moved away.
    fn pinners(&self, from: Position, piece: Piece, king: Position) -> Vec<Position> {
        self.attackers_of(from, piece.color().opponent())
            .into_iter()
            .filter(|&origin| {
                self.piece_at(origin)
                    .is_some_and(|enemy| enemy.can_attack(self, origin, king, from, 1))
            })
            .collect()
    }

    /// Every checker is captured on `to` or blocked by a piece landing there.
    fn resolves_checks(&self, king: Position, checkers: &[Position], to: Position) -> bool {
        checkers.iter().all(|&checker| {
            to == checker
                || self
                    .piece_at(checker)
                    .is_some_and(|enemy| enemy.can_attack(self, checker, king, to, 0))
        })
    }

    /// `to` stays on every pin line (including capturing the pinner).
    fn keeps_pins(&self, king: Position, pinners: &[Position], to: Position) -> bool {
        pinners.iter().all(|&pinner| {
            self.piece_at(pinner)
                .is_some_and(|enemy| enemy.can_attack(self, pinner, king, to, 1))
        })
    }

    /// The king may step to `to`: no enemy attacks it, and it does not stay
    /// on the line of a slider checking it through its current square.
    fn king_can_step(&self, from: Position, king: Piece, to: Position, checkers: &[Position]) -> bool {
        if self.is_threatened_by(to, king.color().opponent()) {
            return false;
        }
        checkers.iter().all(|&checker| {
            self.piece_at(checker)
                .map_or(true, |enemy| !enemy.can_attack(self, checker, to, from, 1))
        })
    }

    pub(crate) fn retain_legal_moves(
        &self,
        from: Position,
        piece: Piece,
        king: Position,
        moves: &mut Vec<Position>,
    ) {
        let checkers = self.checkers(king, piece.color());
        if piece.kind() == PieceKind::King {
            compact(moves, |&to| self.king_can_step(from, piece, to, &checkers));
            return;
        }

        let pinners = self.pinners(from, piece, king);
        if checkers.is_empty() && pinners.is_empty() {
            return;
        }
        compact(moves, |&to| {
            self.resolves_checks(king, &checkers, to) && self.keeps_pins(king, &pinners, to)
        });
    }

    pub(crate) fn retain_legal_special_moves(
        &self,
        from: Position,
        piece: Piece,
        king: Position,
        moves: &mut Vec<SpecialMove>,
    ) {
        if moves.is_empty() {
            return;
        }
        let checkers = self.checkers(king, piece.color());
        let pinners = self.pinners(from, piece, king);
        compact(moves, |mv| match mv.kind {
            SpecialMoveKind::Castle => checkers.is_empty() && self.castle_path_is_safe(from, piece, mv),
            SpecialMoveKind::DoubleStep => {
                self.resolves_checks(king, &checkers, mv.to) && self.keeps_pins(king, &pinners, mv.to)
            }
            SpecialMoveKind::EnPassant => self.en_passant_is_safe(from, piece, king, mv),
        });
    }

    /// No square the king crosses or lands on is attacked.
    fn castle_path_is_safe(&self, from: Position, king: Piece, mv: &SpecialMove) -> bool {
        let Some((step, _)) = from.direction_to(mv.to) else {
            return false;
        };
        let enemy = king.color().opponent();
        let mut cursor = from;
        while cursor != mv.to {
            cursor = cursor.offset(step, 0);
            if self.is_threatened_by(cursor, enemy) {
                return false;
            }
        }
        true
    }

    /// En passant empties two squares on the capturing rank, which can open
    /// lines the threat index does not show, so the resulting occupancy is
    /// checked directly.
    fn en_passant_is_safe(&self, from: Position, pawn: Piece, king: Position, mv: &SpecialMove) -> bool {
        let Some(captured) = mv.involved else {
            return false;
        };
        let view = Overlay::new(self, from, mv.to, pawn).vacate(captured);
        let enemy = pawn.color().opponent();
        !self.pieces(enemy).any(|(origin, attacker)| {
            origin != captured && attacker.can_attack(&view, origin, king, origin, 0)
        })
    }
}
