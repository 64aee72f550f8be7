use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;

/// Fixed fleet composition, 20 occupied cells in total.
pub const FLEET: [ShipKind; 10] = [
    ShipKind::Carrier,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
];

/// Bound on random placement retries for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
