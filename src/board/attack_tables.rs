use once_cell::sync::Lazy;

use super::Position;

pub(crate) const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn build_targets(deltas: &[(i32, i32)]) -> Vec<Vec<Position>> {
    Position::all()
        .map(|from| {
            deltas
                .iter()
                .map(|&(dx, dy)| from.offset(dx, dy))
                .filter(|to| to.is_on_board())
                .collect()
        })
        .collect()
}

/// On-board knight destinations per square index
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| build_targets(&KNIGHT_DELTAS));

/// On-board king destinations per square index
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| build_targets(&KING_DELTAS));
