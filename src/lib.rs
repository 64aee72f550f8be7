//! Engine for a two-player (human vs. computer) grid-based naval combat
//! game: shot resolution, turn switching, win detection, a hunt/target
//! computer opponent, and save/restore that survives process restarts.

mod ai;
mod board;
mod cell;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod player;
mod session;
mod ship;
mod store;

pub use ai::*;
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use session::*;
pub use ship::*;
pub use store::*;
