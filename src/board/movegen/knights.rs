use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Position};

impl Board {
    pub(crate) fn knight_reach(&self, from: Position) -> Vec<Position> {
        from.index()
            .map(|idx| KNIGHT_TARGETS[idx].clone())
            .unwrap_or_default()
    }
}
