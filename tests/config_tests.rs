use std::fs;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{ConfigError, GameConfig};

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    GameConfig::new(
        config.board_size,
        config.num_ships,
        config.ship_lengths.clone(),
    )
    .unwrap();
}

#[test]
fn test_rejects_tiny_board() {
    assert!(matches!(
        GameConfig::new(1, 1, vec![1]),
        Err(ConfigError::BoardTooSmall(1))
    ));
}

#[test]
fn test_rejects_zero_ships() {
    assert!(matches!(
        GameConfig::new(10, 0, vec![2]),
        Err(ConfigError::NoShips)
    ));
}

#[test]
fn test_rejects_empty_length_list() {
    assert!(matches!(
        GameConfig::new(10, 3, Vec::new()),
        Err(ConfigError::NoShipLengths)
    ));
}

#[test]
fn test_rejects_lengths_not_fitting_board() {
    assert!(matches!(
        GameConfig::new(5, 2, vec![3, 5]),
        Err(ConfigError::BadShipLength {
            length: 5,
            board_size: 5
        })
    ));
    assert!(matches!(
        GameConfig::new(5, 2, vec![0]),
        Err(ConfigError::BadShipLength { length: 0, .. })
    ));
}

#[test]
fn test_reconcile_pads_with_existing_lengths() {
    let config = GameConfig::new(10, 6, vec![2, 3]).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let lengths = config.reconciled_lengths(&mut rng);
    assert_eq!(lengths.len(), 6);
    assert_eq!(&lengths[..2], &[2, 3]);
    assert!(lengths.iter().all(|l| [2, 3].contains(l)));
}

#[test]
fn test_reconcile_downsamples_to_ship_count() {
    let config = GameConfig::new(10, 2, vec![2, 3, 4, 5]).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let lengths = config.reconciled_lengths(&mut rng);
    assert_eq!(lengths.len(), 2);
    assert!(lengths.iter().all(|l| [2, 3, 4, 5].contains(l)));
}

#[test]
fn test_reconcile_keeps_matching_list() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(config.reconciled_lengths(&mut rng), vec![5, 4, 3, 3, 2]);
}

#[test]
fn test_parses_properties_text() {
    let text = "# fleet setup\n\
                board_size = 10\n\
                battleships = 5\n\
                battle_ship_length = 5,4,3,3,2\n\
                ui = console\n";
    let config = GameConfig::from_properties(text).unwrap();
    assert_eq!(config.board_size, 10);
    assert_eq!(config.num_ships, 5);
    assert_eq!(config.ship_lengths, vec![5, 4, 3, 3, 2]);
}

#[test]
fn test_missing_key_is_fatal() {
    let err = GameConfig::from_properties("board_size = 10\n").unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey(_)));
}

#[test]
fn test_bad_value_is_fatal() {
    let text = "board_size = big\nbattleships = 5\nbattle_ship_length = 2\n";
    assert!(matches!(
        GameConfig::from_properties(text).unwrap_err(),
        ConfigError::BadValue {
            key: "board_size",
            ..
        }
    ));
}

#[test]
fn test_loads_properties_file() {
    let path = std::env::temp_dir().join("seabattle_config_test.properties");
    fs::write(
        &path,
        "board_size = 8\nbattleships = 3\nbattle_ship_length = 2,3,4\n",
    )
    .unwrap();
    let config = GameConfig::from_properties_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.board_size, 8);
    assert_eq!(config.num_ships, 3);
    assert_eq!(config.ship_lengths, vec![2, 3, 4]);
}
