//! Turn/state machine: shot resolution, win detection, AI delegation, and
//! auto-save.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::ai::HuntTargetAi;
use crate::common::{BoardError, ShotResult};
use crate::config::{BOARD_SIZE, FLEET};
use crate::coord::Coordinate;
use crate::player::Player;
use crate::ship::{Orientation, Ship, ShipKind};
use crate::store::{SaveStore, SavedGame};

/// Game phase. `Setup` is both the initial state and the reset target; the
/// two won states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Setup,
    Playing,
    PlayerWon,
    ComputerWon,
}

/// Core engine owning both players, the targeting AI, the RNG, and the
/// save store. Every state-changing shot while the game is in progress is
/// followed by a save, so a process restart resumes mid-game; entering a
/// terminal state deletes the save instead.
///
/// All gameplay operations are total over their preconditions: shooting
/// out of turn, off the board, at an already-shot cell, or after the game
/// has ended returns [`ShotResult::Invalid`] rather than an error.
pub struct GameEngine {
    human: Player,
    computer: Player,
    status: GameStatus,
    player_turn: bool,
    last_computer_shot: Option<Coordinate>,
    ai: HuntTargetAi,
    store: SaveStore,
    rng: SmallRng,
}

impl GameEngine {
    /// Engine with an injected RNG, so games are reproducible from a seed.
    pub fn new(store: SaveStore, rng: SmallRng) -> Self {
        GameEngine {
            human: Player::new("Player"),
            computer: Player::new("Computer"),
            status: GameStatus::Setup,
            player_turn: true,
            last_computer_shot: None,
            ai: HuntTargetAi::new(BOARD_SIZE),
            store,
            rng,
        }
    }

    /// Engine seeded from `seed`, or from the OS when none is given.
    pub fn with_seed(store: SaveStore, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::new(store, rng)
    }

    /// Begin a fresh game: new players, the computer fleet placed at
    /// random, state back to setup with the human to move, AI and
    /// last-shot memory cleared.
    pub fn start_new_game(&mut self, nickname: &str) -> Result<(), BoardError> {
        self.human = Player::new(nickname);
        self.computer = Player::new("Computer");
        self.computer.board_mut().place_random_fleet(&mut self.rng)?;
        self.status = GameStatus::Setup;
        self.player_turn = true;
        self.last_computer_shot = None;
        self.ai.reset();
        log::debug!("new game started for {}", nickname);
        Ok(())
    }

    /// Place one of the human's ships during setup.
    pub fn place_human_ship(
        &mut self,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.status != GameStatus::Setup {
            return Err(BoardError::NotInSetup);
        }
        self.human
            .board_mut()
            .place_ship(Ship::new(kind, start, orientation))
    }

    /// Clear the human board and place the full fleet at random. Setup
    /// only.
    pub fn place_random_human_fleet(&mut self) -> Result<(), BoardError> {
        if self.status != GameStatus::Setup {
            return Err(BoardError::NotInSetup);
        }
        self.human.board_mut().reset();
        self.human.board_mut().place_random_fleet(&mut self.rng)
    }

    /// Take a human ship back off the board during setup.
    pub fn remove_human_ship(&mut self, ship: &Ship) -> Result<(), BoardError> {
        if self.status != GameStatus::Setup {
            return Err(BoardError::NotInSetup);
        }
        if self.human.board_mut().remove_ship(ship) {
            Ok(())
        } else {
            Err(BoardError::ShipNotFound)
        }
    }

    /// True once the human has placed the whole fleet.
    pub fn fleet_complete(&self) -> bool {
        self.human.board().ship_count() == FLEET.len()
    }

    /// Transition setup -> playing once placement is complete, saving
    /// immediately. Returns whether the transition happened.
    pub fn start_battle(&mut self) -> bool {
        if self.status != GameStatus::Setup || !self.fleet_complete() {
            return false;
        }
        self.status = GameStatus::Playing;
        self.player_turn = true;
        self.save_game();
        log::debug!("battle started");
        true
    }

    /// Resolve a human shot at the computer's board.
    ///
    /// A miss hands the turn to the computer; a hit or a sink keeps it
    /// with the human. Sinking the last ship ends the game.
    pub fn process_player_shot(&mut self, coord: Coordinate) -> ShotResult {
        if !self.player_turn || self.status != GameStatus::Playing {
            return ShotResult::Invalid;
        }
        let result = match self.computer.board_mut().fire(coord) {
            Ok(result) => result,
            Err(_) => return ShotResult::Invalid,
        };
        log::debug!("player shot at {} -> {:?}", coord, result);
        match result {
            ShotResult::Water => {
                self.player_turn = false;
                self.save_game();
            }
            ShotResult::Hit => {
                self.save_game();
            }
            ShotResult::Sunk => {
                self.human.record_sunk_ship();
                if self.computer.board().all_ships_sunk() {
                    self.status = GameStatus::PlayerWon;
                    self.delete_save();
                } else {
                    self.save_game();
                }
            }
            ShotResult::Invalid => {}
        }
        result
    }

    /// Let the computer take its shot at the human's board.
    ///
    /// The AI picks the coordinate; if its memory is somehow exhausted the
    /// engine falls back to the first unshot cell. A miss hands the turn
    /// back to the human; hits and sinks keep the computer shooting.
    pub fn process_computer_shot(&mut self) -> ShotResult {
        if self.player_turn || self.status != GameStatus::Playing {
            return ShotResult::Invalid;
        }
        let target = match self.ai.select_target(&mut self.rng) {
            Some(target) => target,
            None => match self.human.board().next_unshot() {
                Some(target) => target,
                None => return ShotResult::Invalid,
            },
        };
        self.last_computer_shot = Some(target);
        let result = match self.human.board_mut().fire(target) {
            Ok(result) => result,
            Err(_) => return ShotResult::Invalid,
        };
        log::debug!("computer shot at {} -> {:?}", target, result);
        match result {
            ShotResult::Water => {
                self.ai.update_strategy(target, false);
                self.player_turn = true;
                self.save_game();
            }
            ShotResult::Hit => {
                self.ai.update_strategy(target, true);
                self.save_game();
            }
            ShotResult::Sunk => {
                self.ai.update_strategy(target, true);
                self.computer.record_sunk_ship();
                if self.human.board().all_ships_sunk() {
                    self.status = GameStatus::ComputerWon;
                    self.delete_save();
                } else {
                    self.save_game();
                }
            }
            ShotResult::Invalid => {}
        }
        result
    }

    /// Back to setup: both boards and counters cleared, human to move, AI
    /// and last-shot memory reset. Any persisted save is left alone; the
    /// caller decides whether to delete it.
    pub fn reset_game(&mut self) {
        self.human.reset();
        self.computer.reset();
        self.status = GameStatus::Setup;
        self.player_turn = true;
        self.last_computer_shot = None;
        self.ai.reset();
        log::debug!("game reset");
    }

    /// Persist the current game, but only while it is in progress. An I/O
    /// failure is logged; the in-memory state stays authoritative.
    pub fn save_game(&self) {
        if self.status != GameStatus::Playing {
            return;
        }
        let snapshot = SavedGame {
            human: self.human.clone(),
            computer: self.computer.clone(),
            ai: self.ai.clone(),
            status: self.status,
            player_turn: self.player_turn,
        };
        if let Err(e) = self.store.save(&snapshot) {
            log::warn!("failed to save game: {e:#}");
        }
    }

    fn delete_save(&self) {
        if let Err(e) = self.store.delete() {
            log::warn!("failed to delete saved game: {e:#}");
        }
    }

    /// Restore a previously saved game. Returns `false` (leaving the
    /// engine untouched) when no usable save exists; the caller starts
    /// fresh in that case.
    pub fn load_saved_game(&mut self) -> bool {
        let Some(saved) = self.store.load() else {
            return false;
        };
        self.human = saved.human;
        self.computer = saved.computer;
        self.ai = saved.ai;
        self.status = saved.status;
        self.player_turn = saved.player_turn;
        self.last_computer_shot = None;
        log::debug!("saved game restored for {}", self.human.nickname());
        true
    }

    pub fn has_saved_game(&self) -> bool {
        self.store.has_save()
    }

    /// Delete any persisted save, e.g. before starting a new game.
    pub fn delete_saved_game(&self) {
        self.delete_save();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// Coordinate of the computer's most recent shot, for display.
    pub fn last_computer_shot(&self) -> Option<Coordinate> {
        self.last_computer_shot
    }

    /// The winning player once a terminal state is reached.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::PlayerWon => Some(&self.human),
            GameStatus::ComputerWon => Some(&self.computer),
            _ => None,
        }
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn human_mut(&mut self) -> &mut Player {
        &mut self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn computer_mut(&mut self) -> &mut Player {
        &mut self.computer
    }
}
