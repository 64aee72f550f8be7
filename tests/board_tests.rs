use broadside::{
    Board, BoardError, CellStatus, Coordinate, Orientation, Ship, ShipKind, ShotResult,
    BOARD_SIZE, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_registers_exact_coordinates() {
    let mut board = Board::new();
    let ship = Ship::new(ShipKind::Submarine, Coordinate::new(3, 3), Orientation::Horizontal);
    board.place_ship(ship).unwrap();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let c = Coordinate::new(x, y);
            let expected = y == 3 && (3..6).contains(&x);
            assert_eq!(board.has_ship_at(c), expected, "at {}", c);
        }
    }
    assert!(board.ship_at(Coordinate::new(4, 3)).is_some());
    assert!(board.ship_at(Coordinate::new(3, 4)).is_none());
}

#[test]
fn test_place_rejects_overlap_and_out_of_bounds_atomically() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Carrier, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    let before = board.clone();

    let overlapping = Ship::new(ShipKind::Destroyer, Coordinate::new(2, 0), Orientation::Vertical);
    assert_eq!(board.place_ship(overlapping), Err(BoardError::ShipOverlaps));
    assert_eq!(board, before);

    let out_of_bounds = Ship::new(ShipKind::Carrier, Coordinate::new(8, 8), Orientation::Horizontal);
    assert_eq!(board.place_ship(out_of_bounds), Err(BoardError::OutOfBounds));
    assert_eq!(board, before);
}

#[test]
fn test_remove_ship_clears_cells() {
    let mut board = Board::new();
    let ship = Ship::new(ShipKind::Destroyer, Coordinate::new(5, 5), Orientation::Vertical);
    board.place_ship(ship.clone()).unwrap();
    assert!(board.remove_ship(&ship));
    assert_eq!(board.status_at(Coordinate::new(5, 5)), Some(CellStatus::Empty));
    assert!(!board.has_ship_at(Coordinate::new(5, 6)));
    // removing again fails
    assert!(!board.remove_ship(&ship));
}

#[test]
fn test_all_sunk_false_on_empty_board() {
    let board = Board::new();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.sunk_ships_count(), 0);
}

#[test]
fn test_fire_hit_then_sink() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Destroyer, Coordinate::new(2, 2), Orientation::Horizontal))
        .unwrap();

    assert_eq!(board.fire(Coordinate::new(2, 2)).unwrap(), ShotResult::Hit);
    assert_eq!(board.status_at(Coordinate::new(2, 2)), Some(CellStatus::Hit));

    assert_eq!(board.fire(Coordinate::new(3, 2)).unwrap(), ShotResult::Sunk);
    // every cell of the sunk ship is marked
    assert_eq!(board.status_at(Coordinate::new(2, 2)), Some(CellStatus::Sunk));
    assert_eq!(board.status_at(Coordinate::new(3, 2)), Some(CellStatus::Sunk));
    assert!(board.all_ships_sunk());
    assert_eq!(board.sunk_ships_count(), 1);
}

#[test]
fn test_fire_rejects_repeats_and_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.fire(Coordinate::new(9, 9)).unwrap(), ShotResult::Water);
    assert_eq!(board.fire(Coordinate::new(9, 9)), Err(BoardError::AlreadyShot));
    assert_eq!(board.fire(Coordinate::new(10, 0)), Err(BoardError::OutOfBounds));
}

#[test]
fn test_random_fleet_places_all_ships() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_random_fleet(&mut rng).unwrap();
    assert_eq!(board.ship_count(), FLEET.len());

    let expected_cells: usize = FLEET.iter().map(|k| k.size()).sum();
    let occupied = (0..BOARD_SIZE)
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate::new(x, y)))
        .filter(|&c| board.has_ship_at(c))
        .count();
    assert_eq!(occupied, expected_cells, "ships must not overlap");
}

#[test]
fn test_reset_clears_everything() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    board.place_random_fleet(&mut rng).unwrap();
    board.fire(Coordinate::new(0, 0)).unwrap();

    board.reset();
    assert_eq!(board.ship_count(), 0);
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            assert_eq!(
                board.status_at(Coordinate::new(x, y)),
                Some(CellStatus::Empty)
            );
        }
    }
}
