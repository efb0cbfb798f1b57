//! Game controller on top of the board rules.
//!
//! [`Game`] enforces turn order, classifies check, mate and stalemate after
//! each ply, records history and reports every change as [`GameEvent`]s.
//! [`SharedGame`] sets a game up on a background thread and serialises
//! access to it.

mod controller;
mod error;
mod events;
mod setup;

pub use controller::Game;
pub use error::GameError;
pub use events::{
    GameEvent, GameState, RollbackReport, SquareInfo, TurnReport, BLACK_WIN, DRAW, WHITE_WIN,
};
pub use setup::SharedGame;
