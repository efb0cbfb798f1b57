use super::error::MoveError;
use super::{Color, Piece, PieceKind, Position, SpecialMove};

/// One cell of the board.
///
/// Besides its occupant a square carries the per-ply caches written by
/// [`Board::calculate_moves`]: the origins threatening it and the legal
/// moves of its occupant. Cached move order is unspecified.
#[derive(Clone, Debug, Default)]
pub struct Square {
    pub(crate) occupant: Option<Piece>,
    pub(crate) threats: Vec<Position>,
    pub(crate) moves: Vec<Position>,
    pub(crate) special_moves: Vec<SpecialMove>,
}

impl Square {
    #[inline]
    #[must_use]
    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Origins of every piece, of either color, that attacks this square
    #[inline]
    #[must_use]
    pub fn threats(&self) -> &[Position] {
        &self.threats
    }

    /// Legal ordinary destinations of the occupant
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Legal special moves of the occupant
    #[inline]
    #[must_use]
    pub fn special_moves(&self) -> &[SpecialMove] {
        &self.special_moves
    }

    pub(crate) fn clear_caches(&mut self) {
        self.threats.clear();
        self.moves.clear();
        self.special_moves.clear();
    }
}

/// The 64 squares, indexed by `rank * 8 + file`.
///
/// The board exclusively owns every square and every piece. Exactly one king
/// per color must be present; a missing king is a broken invariant and
/// panics wherever a king is looked up.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Square; 64],
}

impl Board {
    /// The standard starting position with moves calculated for both sides.
    pub fn new() -> Self {
        let mut board = Board::empty();
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
        for (file, kind) in back_rank.iter().enumerate() {
            let x = file as i32;
            board.set_piece(Position::new(x, 0), Piece::new(*kind, Color::White));
            board.set_piece(Position::new(x, 7), Piece::new(*kind, Color::Black));
            board.set_piece(Position::new(x, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Position::new(x, 6), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board.calculate_moves();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|_| Square::default()),
        }
    }

    /// The square at `pos`, or `None` when either coordinate is outside 0-7.
    #[inline]
    #[must_use]
    pub fn square_at(&self, pos: Position) -> Option<&Square> {
        pos.index().map(|idx| &self.squares[idx])
    }

    #[inline]
    pub(crate) fn square_mut(&mut self, pos: Position) -> Option<&mut Square> {
        match pos.index() {
            Some(idx) => Some(&mut self.squares[idx]),
            None => None,
        }
    }

    /// Occupant of `pos`; `None` for empty or off-board positions.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.square_at(pos).and_then(Square::occupant)
    }

    #[inline]
    pub(crate) fn is_empty(&self, pos: Position) -> bool {
        matches!(self.square_at(pos), Some(square) if !square.is_occupied())
    }

    /// Places `piece` on an on-board square, returning what stood there.
    pub(crate) fn set_piece(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.square_mut(pos)
            .and_then(|square| square.occupant.replace(piece))
    }

    pub(crate) fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.square_mut(pos).and_then(|square| square.occupant.take())
    }

    /// Occupied squares of `color` with their pieces
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, piece)| piece.color() == color)
    }

    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, square)| square.occupant.map(|p| (Position::from_index(idx), p)))
    }

    /// Position of the `color` king, or `None` if it is missing.
    #[must_use]
    pub fn try_find_king(&self, color: Color) -> Option<Position> {
        self.occupied()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(pos, _)| pos)
    }

    /// Position of the `color` king.
    ///
    /// # Panics
    ///
    /// Panics if that king is not on the board.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Position {
        match self.try_find_king(color) {
            Some(pos) => pos,
            None => panic!("the {color} king must always be on the board"),
        }
    }

    /// Whether an enemy threatens `pos`. Enemy means the opponent of the
    /// occupant; on an empty square any threat counts.
    pub fn is_position_threatened(&self, pos: Position) -> Result<bool, MoveError> {
        let square = self
            .square_at(pos)
            .ok_or(MoveError::OutOfBounds { position: pos })?;
        Ok(match square.occupant {
            Some(piece) => self.is_threatened_by(pos, piece.color().opponent()),
            None => !square.threats.is_empty(),
        })
    }

    /// Whether any `attacker` piece threatens `pos` in the current threat index.
    #[must_use]
    pub fn is_threatened_by(&self, pos: Position, attacker: Color) -> bool {
        self.square_at(pos).is_some_and(|square| {
            square
                .threats
                .iter()
                .any(|&origin| self.piece_at(origin).is_some_and(|p| p.color() == attacker))
        })
    }

    /// Every square `attacker` threatens.
    #[must_use]
    pub fn threatened_squares(&self, attacker: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.is_threatened_by(pos, attacker))
            .collect()
    }

    /// Legal ordinary destinations from `pos` if it holds a `color` piece.
    #[must_use]
    pub fn legal_moves(&self, color: Color, pos: Position) -> &[Position] {
        match self.square_at(pos) {
            Some(square) if square.occupant.is_some_and(|p| p.color() == color) => &square.moves,
            _ => &[],
        }
    }

    /// Legal special moves from `pos` if it holds a `color` piece.
    #[must_use]
    pub fn legal_special_moves(&self, color: Color, pos: Position) -> &[SpecialMove] {
        match self.square_at(pos) {
            Some(square) if square.occupant.is_some_and(|p| p.color() == color) => {
                &square.special_moves
            }
            _ => &[],
        }
    }

    /// Whether `color` has at least one legal ordinary or special move.
    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.squares.iter().any(|square| {
            square.occupant.is_some_and(|p| p.color() == color)
                && (!square.moves.is_empty() || !square.special_moves.is_empty())
        })
    }

    /// Whether the `color` king currently stands in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_threatened_by(self.find_king(color), color.opponent())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
