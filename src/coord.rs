//! Grid coordinates, used as map and set keys throughout the crate.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Immutable board address. `x` is the column, `y` the row, both counted
/// from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on a `size`×`size` board.
    pub fn in_bounds(&self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order.
    /// The order is fixed so that follow-up targeting is deterministic.
    pub fn orthogonal_neighbors(&self, size: u8) -> Vec<Coordinate> {
        let mut out = Vec::with_capacity(4);
        if self.y > 0 {
            out.push(Coordinate::new(self.x, self.y - 1));
        }
        if self.y + 1 < size {
            out.push(Coordinate::new(self.x, self.y + 1));
        }
        if self.x > 0 {
            out.push(Coordinate::new(self.x - 1, self.y));
        }
        if self.x + 1 < size {
            out.push(Coordinate::new(self.x + 1, self.y));
        }
        out
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
