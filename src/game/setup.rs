//! Background game setup behind a blocking handle.

use std::sync::Arc;
use std::thread;

use parking_lot::{Condvar, Mutex};

use super::Game;

struct Slot {
    game: Mutex<Option<Game>>,
    ready: Condvar,
}

/// Shared, lock-protected handle to a game that is set up on a background
/// thread. Every access waits until setup has finished.
#[derive(Clone)]
pub struct SharedGame {
    slot: Arc<Slot>,
}

impl SharedGame {
    /// Starts setting up a fresh game and returns immediately.
    #[must_use]
    pub fn initialize() -> Self {
        let slot = Arc::new(Slot {
            game: Mutex::new(None),
            ready: Condvar::new(),
        });

        let worker = Arc::clone(&slot);
        thread::spawn(move || {
            let game = Game::new();
            log::debug!("game setup finished");
            let mut slot = worker.game.lock();
            // a game installed through `replace` wins over the default one
            if slot.is_none() {
                *slot = Some(game);
            }
            worker.ready.notify_all();
        });

        SharedGame { slot }
    }

    /// Whether setup has finished.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slot.game.lock().is_some()
    }

    /// Runs `f` on the game, blocking until setup has finished.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut guard = self.slot.game.lock();
        while guard.is_none() {
            self.slot.ready.wait(&mut guard);
        }
        let game = guard.get_or_insert_with(Game::new);
        f(game)
    }

    /// Replaces the game, e.g. after loading a snapshot.
    pub fn replace(&self, game: Game) {
        *self.slot.game.lock() = Some(game);
        self.slot.ready.notify_all();
    }
}
