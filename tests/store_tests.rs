use broadside::{
    Coordinate, GameStatus, HuntTargetAi, Orientation, Player, SaveStore, SavedGame, Ship,
    ShipKind, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn temp_store(name: &str) -> SaveStore {
    let dir = std::env::temp_dir().join(format!("broadside_store_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    SaveStore::new(dir)
}

fn sample_game(seed: u64) -> SavedGame {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut human = Player::new("alice");
    human.board_mut().place_random_fleet(&mut rng).unwrap();
    let mut computer = Player::new("Computer");
    computer.board_mut().place_random_fleet(&mut rng).unwrap();
    // a mix of hit and miss history on both sides
    human.board_mut().fire(Coordinate::new(0, 0)).unwrap();
    computer.board_mut().fire(Coordinate::new(9, 9)).unwrap();

    let mut ai = HuntTargetAi::new(BOARD_SIZE);
    ai.update_strategy(Coordinate::new(9, 9), true);

    SavedGame {
        human,
        computer,
        ai,
        status: GameStatus::Playing,
        player_turn: false,
    }
}

#[test]
fn test_save_load_roundtrip() {
    let store = temp_store("roundtrip");
    let game = sample_game(21);
    store.save(&game).unwrap();
    let loaded = store.load().expect("save should load back");
    assert_eq!(loaded, game);
}

#[test]
fn test_load_without_save_is_none() {
    let store = temp_store("missing");
    assert!(!store.has_save());
    assert!(store.load().is_none());
}

#[test]
fn test_corrupt_save_treated_as_absent() {
    let store = temp_store("corrupt");
    store.save(&sample_game(22)).unwrap();
    std::fs::write(store.dir().join("broadside.save"), b"not a saved game").unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_player_record_is_readable_without_blob() {
    let store = temp_store("record");
    let game = sample_game(23);
    store.save(&game).unwrap();

    let (nickname, sunk) = store.load_record().unwrap();
    assert_eq!(nickname, "alice");
    assert_eq!(sunk, game.human.sunk_ships());
}

#[test]
fn test_delete_removes_save() {
    let store = temp_store("delete");
    store.save(&sample_game(24)).unwrap();
    assert!(store.has_save());
    store.delete().unwrap();
    assert!(!store.has_save());
    assert!(store.load().is_none());
    // deleting again is not an error
    store.delete().unwrap();
}

#[test]
fn test_bincode_blob_roundtrips_exactly() {
    let game = sample_game(25);
    let bytes = bincode::serialize(&game).unwrap();
    let decoded: SavedGame = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, game);
    // hit state survives: the ship fired on above still reports its hit
    let ship = decoded.human.board().ship_at(Coordinate::new(0, 0));
    if let Some(ship) = ship {
        assert!(ship.is_hit_at(Coordinate::new(0, 0)));
    }
}

#[test]
fn test_saved_ship_positions_survive() {
    let store = temp_store("positions");
    let mut game = sample_game(26);
    game.human.board_mut().reset();
    game.human
        .board_mut()
        .place_ship(Ship::new(ShipKind::Carrier, Coordinate::new(2, 3), Orientation::Vertical))
        .unwrap();
    store.save(&game).unwrap();

    let loaded = store.load().unwrap();
    for y in 3..7 {
        assert!(loaded.human.board().has_ship_at(Coordinate::new(2, y)));
    }
    assert!(!loaded.human.board().has_ship_at(Coordinate::new(2, 7)));
}
