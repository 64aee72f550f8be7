//! Per-cell occupancy and shot status.

use serde::{Deserialize, Serialize};

/// Status of a single board cell.
///
/// Transitions are one-directional: `Empty -> Ship` on placement (and back
/// on removal during setup), `Empty -> Miss` / `Ship -> Hit` on a shot, and
/// `Ship`/`Hit -> Sunk` once the owning ship has every segment hit. A cell
/// that has been shot never becomes shootable again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellStatus {
    /// True once a shot has resolved at this cell.
    pub fn is_shot(&self) -> bool {
        matches!(self, CellStatus::Hit | CellStatus::Miss | CellStatus::Sunk)
    }
}
