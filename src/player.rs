//! A participant: nickname, owned board, and sunk-ship tally.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// One side of the game. The `sunk_ships` counter tracks how many of the
/// opponent's ships this player has sunk; the engine maintains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    nickname: String,
    board: Board,
    sunk_ships: usize,
}

impl Player {
    pub fn new(nickname: impl Into<String>) -> Self {
        Player {
            nickname: nickname.into(),
            board: Board::new(),
            sunk_ships: 0,
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    pub(crate) fn record_sunk_ship(&mut self) {
        self.sunk_ships += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.sunk_ships = 0;
    }
}
