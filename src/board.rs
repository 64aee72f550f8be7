//! Game board: cell grid, ship registry, and shot resolution.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cell::CellStatus;
use crate::common::{BoardError, ShotResult};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// A `size`×`size` grid of cells plus the ships placed on it. The
/// coordinate-to-ship map gives O(1) hit lookup; its invariant is that
/// every entry points at exactly one ship whose cell list contains the
/// coordinate, and no two ships share a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<CellStatus>,
    ships: Vec<Ship>,
    positions: HashMap<Coordinate, usize>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            size: BOARD_SIZE,
            cells: vec![CellStatus::Empty; BOARD_SIZE as usize * BOARD_SIZE as usize],
            ships: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    fn index(&self, coord: Coordinate) -> usize {
        coord.y as usize * self.size as usize + coord.x as usize
    }

    /// Status of the cell at `coord`, or `None` out of bounds.
    pub fn status_at(&self, coord: Coordinate) -> Option<CellStatus> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        Some(self.cells[self.index(coord)])
    }

    /// Place a ship. Atomic: either every cell is registered or, on any
    /// out-of-bounds or overlapping coordinate, nothing changes.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for &c in ship.cells() {
            if !c.in_bounds(self.size) {
                return Err(BoardError::OutOfBounds);
            }
            if self.positions.contains_key(&c) {
                return Err(BoardError::ShipOverlaps);
            }
        }
        let idx = self.ships.len();
        for &c in ship.cells() {
            let i = self.index(c);
            self.cells[i] = CellStatus::Ship;
            self.positions.insert(c, idx);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Remove a previously placed ship, clearing its cells back to empty.
    /// Fails if the ship is not on this board.
    pub fn remove_ship(&mut self, ship: &Ship) -> bool {
        let Some(idx) = self.ships.iter().position(|s| s.cells() == ship.cells()) else {
            return false;
        };
        let removed = self.ships.remove(idx);
        for &c in removed.cells() {
            let i = self.index(c);
            self.cells[i] = CellStatus::Empty;
        }
        // Indices past the removed ship shift down; rebuild the map.
        self.positions.clear();
        for (i, s) in self.ships.iter().enumerate() {
            for &c in s.cells() {
                self.positions.insert(c, i);
            }
        }
        true
    }

    /// Ship occupying `coord`, if any. O(1).
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.positions.get(&coord).map(|&i| &self.ships[i])
    }

    pub fn has_ship_at(&self, coord: Coordinate) -> bool {
        self.positions.contains_key(&coord)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn sunk_ships_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// True when every ship is sunk. A board with no ships is not "all
    /// sunk".
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.is_sunk())
    }

    /// Resolve a shot at `coord`, marking the cell and updating the ship's
    /// hit state. Errors on out-of-bounds or already-shot cells; otherwise
    /// returns `Water`, `Hit`, or `Sunk`.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        let status = self.status_at(coord).ok_or(BoardError::OutOfBounds)?;
        if status.is_shot() {
            return Err(BoardError::AlreadyShot);
        }
        let Some(&ship_idx) = self.positions.get(&coord) else {
            let i = self.index(coord);
            self.cells[i] = CellStatus::Miss;
            return Ok(ShotResult::Water);
        };
        self.ships[ship_idx].hit(coord);
        if self.ships[ship_idx].is_sunk() {
            let sunk_cells: Vec<Coordinate> = self.ships[ship_idx].cells().to_vec();
            for c in sunk_cells {
                let i = self.index(c);
                self.cells[i] = CellStatus::Sunk;
            }
            Ok(ShotResult::Sunk)
        } else {
            let i = self.index(coord);
            self.cells[i] = CellStatus::Hit;
            Ok(ShotResult::Hit)
        }
    }

    /// First coordinate in row-major order that has not been shot yet.
    pub fn next_unshot(&self) -> Option<Coordinate> {
        for y in 0..self.size {
            for x in 0..self.size {
                let c = Coordinate::new(x, y);
                if !self.cells[self.index(c)].is_shot() {
                    return Some(c);
                }
            }
        }
        None
    }

    /// Clear ships and positions and reinitialize every cell to empty.
    pub fn reset(&mut self) {
        self.cells.fill(CellStatus::Empty);
        self.ships.clear();
        self.positions.clear();
    }

    /// Place the full fleet at random, retrying each ship up to the
    /// attempt bound until a non-overlapping in-bounds position is found.
    pub fn place_random_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for kind in FLEET {
            let mut attempts = 0;
            loop {
                if attempts >= MAX_PLACEMENT_ATTEMPTS {
                    return Err(BoardError::UnableToPlaceShip);
                }
                attempts += 1;
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let len = kind.size() as u8;
                let max_x = if orientation == Orientation::Horizontal {
                    self.size - len
                } else {
                    self.size - 1
                };
                let max_y = if orientation == Orientation::Vertical {
                    self.size - len
                } else {
                    self.size - 1
                };
                let start = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
                let ship = Ship::new(kind, start, orientation);
                if self.place_ship(ship).is_ok() {
                    break;
                }
            }
        }
        Ok(())
    }
}
