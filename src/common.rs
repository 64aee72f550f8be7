//! Common types: shot results and board errors.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Result of a shot as reported to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    /// Shot landed in open water.
    Water,
    /// Shot hit a ship without sinking it.
    Hit,
    /// Shot hit the last unhit segment of a ship.
    Sunk,
    /// Shot was rejected: out of turn, out of bounds, already-shot cell,
    /// or the game is not in progress.
    Invalid,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate or ship extends past the board edge.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A shot was already resolved at this cell.
    AlreadyShot,
    /// Ship is not registered on this board.
    ShipNotFound,
    /// Random placement gave up after the retry bound.
    UnableToPlaceShip,
    /// Operation is only valid during setup.
    NotInSetup,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            BoardError::AlreadyShot => write!(f, "a shot was already made at this position"),
            BoardError::ShipNotFound => write!(f, "ship is not present on the board"),
            BoardError::UnableToPlaceShip => write!(f, "unable to find a placement for ship"),
            BoardError::NotInSetup => write!(f, "operation is only allowed during setup"),
        }
    }
}

impl std::error::Error for BoardError {}
