use super::super::{Board, Position};

impl Board {
    /// Squares along each ray up to and including the first occupied square.
    pub(crate) fn slider_reach(&self, from: Position, directions: &[(i32, i32)]) -> Vec<Position> {
        let mut reach = Vec::new();
        for &(dx, dy) in directions {
            let mut cursor = from.offset(dx, dy);
            while let Some(square) = self.square_at(cursor) {
                reach.push(cursor);
                if square.is_occupied() {
                    break;
                }
                cursor = cursor.offset(dx, dy);
            }
        }
        reach
    }
}
