//! Ship kinds, orientation, and per-ship hit tracking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship: fixed size and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipKind {
    Carrier,
    Submarine,
    Destroyer,
    Frigate,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(&self) -> usize {
        match self {
            ShipKind::Carrier => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Frigate => 1,
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Frigate => "Frigate",
        }
    }
}

/// A ship with its occupied coordinates and the subset already hit.
///
/// Construction does not validate bounds or overlap; the board does that
/// when the ship is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    kind: ShipKind,
    cells: Vec<Coordinate>,
    hits: HashSet<Coordinate>,
}

impl Ship {
    /// Build a ship of `kind` extending from `start` in `orientation`.
    pub fn new(kind: ShipKind, start: Coordinate, orientation: Orientation) -> Self {
        let mut ship = Ship {
            kind,
            cells: Vec::new(),
            hits: HashSet::new(),
        };
        ship.set_position(start, orientation);
        ship
    }

    /// Regenerate the coordinate list as `size` consecutive cells extending
    /// in +x (horizontal) or +y (vertical) from `start`. Replaces any prior
    /// position and clears hit history.
    pub fn set_position(&mut self, start: Coordinate, orientation: Orientation) {
        self.cells = (0..self.kind.size() as u8)
            .map(|i| match orientation {
                // Saturating keeps degenerate starts from wrapping; the
                // board rejects the out-of-bounds result on placement.
                Orientation::Horizontal => Coordinate::new(start.x.saturating_add(i), start.y),
                Orientation::Vertical => Coordinate::new(start.x, start.y.saturating_add(i)),
            })
            .collect();
        self.hits.clear();
    }

    /// Register a hit at `coord`. Returns `true` only when the coordinate
    /// belongs to this ship and was not already hit; re-hitting is a no-op.
    pub fn hit(&mut self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.hits.insert(coord)
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.kind.size()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Occupied coordinates in placement order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_hit_at(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord)
    }
}
