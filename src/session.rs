//! Shared handle around the engine for concurrent callers.
//!
//! The engine is typically driven from a UI event thread while a timer
//! drives the computer's turns, so every operation runs under a single
//! per-session lock held for the whole operation, including the
//! persistence write. A save therefore always reflects one fully applied
//! operation, never an interleaving.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::common::{BoardError, ShotResult};
use crate::coord::Coordinate;
use crate::game::{GameEngine, GameStatus};
use crate::ship::{Orientation, ShipKind};

/// Cloneable, thread-safe session owning one [`GameEngine`].
#[derive(Clone)]
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
}

impl GameSession {
    pub fn new(engine: GameEngine) -> Self {
        GameSession {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    // A panic while holding the lock cannot leave the game half-applied in
    // a way later shots would corrupt, so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the engine. For callers that need
    /// more than the delegated operations below, e.g. board rendering.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn start_new_game(&self, nickname: &str) -> Result<(), BoardError> {
        self.lock().start_new_game(nickname)
    }

    pub fn place_human_ship(
        &self,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.lock().place_human_ship(kind, start, orientation)
    }

    pub fn fleet_complete(&self) -> bool {
        self.lock().fleet_complete()
    }

    pub fn start_battle(&self) -> bool {
        self.lock().start_battle()
    }

    pub fn process_player_shot(&self, coord: Coordinate) -> ShotResult {
        self.lock().process_player_shot(coord)
    }

    pub fn process_computer_shot(&self) -> ShotResult {
        self.lock().process_computer_shot()
    }

    pub fn reset_game(&self) {
        self.lock().reset_game()
    }

    pub fn save_game(&self) {
        self.lock().save_game()
    }

    pub fn load_saved_game(&self) -> bool {
        self.lock().load_saved_game()
    }

    pub fn has_saved_game(&self) -> bool {
        self.lock().has_saved_game()
    }

    pub fn delete_saved_game(&self) {
        self.lock().delete_saved_game()
    }

    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    pub fn is_player_turn(&self) -> bool {
        self.lock().is_player_turn()
    }

    pub fn last_computer_shot(&self) -> Option<Coordinate> {
        self.lock().last_computer_shot()
    }

    /// Nickname of the winner once the game has ended.
    pub fn winner_nickname(&self) -> Option<String> {
        self.lock().winner().map(|p| p.nickname().to_string())
    }
}
