use broadside::{Coordinate, Orientation, Ship, ShipKind};

#[test]
fn test_position_horizontal_and_vertical() {
    let ship = Ship::new(ShipKind::Submarine, Coordinate::new(2, 5), Orientation::Horizontal);
    assert_eq!(
        ship.cells(),
        &[
            Coordinate::new(2, 5),
            Coordinate::new(3, 5),
            Coordinate::new(4, 5)
        ]
    );

    let ship = Ship::new(ShipKind::Destroyer, Coordinate::new(7, 1), Orientation::Vertical);
    assert_eq!(ship.cells(), &[Coordinate::new(7, 1), Coordinate::new(7, 2)]);
}

#[test]
fn test_hit_is_idempotent() {
    let mut ship = Ship::new(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal);
    assert!(ship.hit(Coordinate::new(0, 0)));
    assert_eq!(ship.hit_count(), 1);
    // re-hitting the same segment is a no-op
    assert!(!ship.hit(Coordinate::new(0, 0)));
    assert_eq!(ship.hit_count(), 1);
    // coordinates off the ship never register
    assert!(!ship.hit(Coordinate::new(5, 5)));
    assert_eq!(ship.hit_count(), 1);
}

#[test]
fn test_sunk_iff_all_segments_hit() {
    let mut ship = Ship::new(ShipKind::Submarine, Coordinate::new(1, 1), Orientation::Vertical);
    for (i, &c) in ship.cells().to_vec().iter().enumerate() {
        assert!(!ship.is_sunk());
        assert!(ship.hit(c));
        assert_eq!(ship.hit_count(), i + 1);
    }
    assert!(ship.is_sunk());
}

#[test]
fn test_replacement_resets_cells_and_hits() {
    let mut ship = Ship::new(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal);
    ship.hit(Coordinate::new(0, 0));
    ship.set_position(Coordinate::new(4, 4), Orientation::Vertical);
    assert_eq!(ship.cells(), &[Coordinate::new(4, 4), Coordinate::new(4, 5)]);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.contains(Coordinate::new(0, 0)));
}

#[test]
fn test_kind_sizes_and_names() {
    assert_eq!(ShipKind::Carrier.size(), 4);
    assert_eq!(ShipKind::Frigate.size(), 1);
    assert_eq!(ShipKind::Frigate.name(), "Frigate");
}
