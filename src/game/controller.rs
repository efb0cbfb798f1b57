//! Turn order, result classification and history for one game.

use crate::board::{Board, Color, Position, Snapshot, SpecialMove, SpecialMoveKind};
use crate::history::History;

use super::error::GameError;
use super::events::{GameEvent, GameState, RollbackReport, SquareInfo, TurnReport};

/// Outcome of classifying the side to move after a ply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Standing {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

/// A game between two local players.
///
/// The game only talks to the board through its public API: it asks for
/// legal lists, commits moves, recalculates and classifies.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    next_player: Color,
    history: History,
    state: GameState,
    initial: Snapshot,
}

impl Game {
    /// A fresh game, White to move.
    #[must_use]
    pub fn new() -> Self {
        let board = Board::new();
        let initial = board.create_snapshot(Color::White);
        Game {
            board,
            next_player: Color::White,
            history: History::new(),
            state: GameState::Ready,
            initial,
        }
    }

    /// A game continuing from `snapshot`. The position may already be decided.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, GameError> {
        let board = Board::from_snapshot(snapshot)?;
        let next_player = snapshot.side_to_move();
        let mut game = Game {
            board,
            next_player,
            history: History::new(),
            state: GameState::Ready,
            initial: snapshot.clone(),
        };
        game.state = game.state_for(game.standing());
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn next_player(&self) -> Color {
        self.next_player
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current position with the side to move.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.board.create_snapshot(self.next_player)
    }

    /// Legal destinations of the side to move's piece on `pos`.
    #[must_use]
    pub fn possible_moves(&self, pos: Position) -> &[Position] {
        if self.state.is_over() {
            return &[];
        }
        self.board.legal_moves(self.next_player, pos)
    }

    /// Legal special moves of the side to move's piece on `pos`.
    #[must_use]
    pub fn special_moves(&self, pos: Position) -> &[SpecialMove] {
        if self.state.is_over() {
            return &[];
        }
        self.board.legal_special_moves(self.next_player, pos)
    }

    pub fn perform_move(&mut self, from: Position, to: Position) -> Result<TurnReport, GameError> {
        self.ensure_running()?;
        if !self.possible_moves(from).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let outcome = self.board.perform_move(from, to)?;
        let mut events = vec![GameEvent::PieceMoved { from, to }];
        if let Some(kind) = outcome.promotion {
            events.push(GameEvent::SquareUpdated(SquareInfo::occupied(
                to,
                kind,
                self.next_player,
            )));
        }
        Ok(self.finish_turn(outcome.notation, events))
    }

    pub fn perform_special_move(
        &mut self,
        from: Position,
        mv: &SpecialMove,
    ) -> Result<TurnReport, GameError> {
        self.ensure_running()?;
        if !self.special_moves(from).contains(mv) {
            return Err(GameError::IllegalSpecialMove { from, mv: *mv });
        }

        let outcome = self.board.perform_special_move(from, mv)?;
        let mut events = vec![GameEvent::PieceMoved { from, to: mv.to }];
        match (mv.kind, mv.involved, outcome.secondary) {
            (SpecialMoveKind::Castle, Some(rook), Some(rook_to)) => {
                events.push(GameEvent::PieceMoved {
                    from: rook,
                    to: rook_to,
                });
            }
            (SpecialMoveKind::EnPassant, _, Some(captured)) => {
                events.push(GameEvent::SquareUpdated(SquareInfo::empty(captured)));
            }
            _ => {}
        }
        Ok(self.finish_turn(outcome.notation, events))
    }

    /// Plays `from` to `to`, preferring a special move landing on `to`.
    pub fn play(&mut self, from: Position, to: Position) -> Result<TurnReport, GameError> {
        let special = self
            .special_moves(from)
            .iter()
            .find(|mv| mv.to == to)
            .copied();
        match special {
            Some(mv) => self.perform_special_move(from, &mv),
            None => self.perform_move(from, to),
        }
    }

    /// Takes back up to `plies` moves.
    ///
    /// The board is rebuilt from the latest remaining snapshot, so moved and
    /// double-step flags are inferred again rather than restored.
    pub fn rollback(&mut self, plies: usize) -> Result<RollbackReport, GameError> {
        if self.history.is_empty() || plies == 0 {
            return Err(GameError::NothingToRollback);
        }
        let target = self
            .history
            .len()
            .checked_sub(plies)
            .and_then(|keep| keep.checked_sub(1))
            .and_then(|idx| self.history.entries().get(idx))
            .map_or_else(|| self.initial.clone(), |entry| entry.snapshot.clone());
        let board = Board::from_snapshot(&target)?;

        let undone: Vec<String> = self
            .history
            .rollback(plies)
            .into_iter()
            .map(|entry| entry.notation)
            .collect();
        self.board = board;
        self.next_player = target.side_to_move();
        self.state = self.state_for(self.standing());

        log::debug!(
            "rolled back {} ({}), {} to move",
            undone.len(),
            undone.join(" "),
            self.next_player
        );

        Ok(RollbackReport {
            undone,
            state: self.state,
            next_player: self.next_player,
            events: vec![
                GameEvent::NextPlayer(self.next_player),
                GameEvent::StateChanged(self.state),
            ],
        })
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver { state: self.state });
        }
        Ok(())
    }

    fn standing(&self) -> Standing {
        let has_moves = self.board.has_legal_moves(self.next_player);
        let in_check = self.board.is_in_check(self.next_player);
        match (has_moves, in_check) {
            (false, true) => Standing::Checkmate,
            (false, false) => Standing::Stalemate,
            (true, true) => Standing::Check,
            (true, false) => Standing::Playing,
        }
    }

    fn state_for(&self, standing: Standing) -> GameState {
        match standing {
            Standing::Checkmate => GameState::win_for(self.next_player.opponent()),
            Standing::Stalemate => GameState::Stalemate,
            Standing::Playing | Standing::Check => GameState::Ready,
        }
    }

    /// Hands the turn over, classifies the new position and records the move.
    fn finish_turn(&mut self, mut notation: String, mut events: Vec<GameEvent>) -> TurnReport {
        self.next_player = self.next_player.opponent();
        events.push(GameEvent::NextPlayer(self.next_player));
        self.board.calculate_moves();

        let standing = self.standing();
        self.state = self.state_for(standing);
        match standing {
            Standing::Checkmate => notation.push('#'),
            Standing::Check => notation.push('+'),
            Standing::Stalemate => events.push(GameEvent::StateChanged(GameState::Stalemate)),
            Standing::Playing => {}
        }

        self.history
            .push(self.board.create_snapshot(self.next_player), notation.clone());
        events.push(GameEvent::Notation(notation.clone()));

        if standing == Standing::Checkmate {
            events.push(GameEvent::StateChanged(self.state));
        }
        if let Some(result) = self.state.result() {
            events.push(GameEvent::Notation(result.to_string()));
            log::info!("game over after {} plies: {} ({result})", self.history.len(), self.state);
        }

        TurnReport {
            notation,
            state: self.state,
            next_player: self.next_player,
            events,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
