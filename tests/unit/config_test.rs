//! Tests for configuration validation

use parking_allocator::config::{LotConfig, MAX_TOTAL_SPOTS};

#[test]
fn test_lot_config_validation() {
    let valid = LotConfig {
        floors: 3,
        spots_per_floor: 20,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_lot_config_invalid_floors() {
    let invalid = LotConfig {
        floors: 0,
        spots_per_floor: 20,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_lot_config_invalid_spots() {
    let invalid = LotConfig {
        floors: 3,
        spots_per_floor: 0,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_lot_config_capacity_overflow() {
    let invalid = LotConfig {
        floors: usize::MAX,
        spots_per_floor: 2,
    };
    assert_eq!(invalid.validate(), Err("total capacity overflows".to_string()));
}

#[test]
fn test_lot_config_capacity_limit() {
    let at_limit = LotConfig {
        floors: 1,
        spots_per_floor: MAX_TOTAL_SPOTS,
    };
    assert!(at_limit.validate().is_ok());

    let over = LotConfig {
        floors: 2,
        spots_per_floor: MAX_TOTAL_SPOTS / 2 + 1,
    };
    assert!(over.validate().unwrap_err().contains("exceeds the limit"));
}

#[test]
fn test_lot_config_from_json() {
    let json = r#"{ "floors": 2, "spots_per_floor": 3 }"#;

    let config = LotConfig::from_json_str(json).unwrap();
    assert_eq!(config.floors, 2);
    assert_eq!(config.spots_per_floor, 3);
}

#[test]
fn test_lot_config_from_json_rejects_invalid() {
    assert!(LotConfig::from_json_str(r#"{ "floors": 0, "spots_per_floor": 3 }"#).is_err());
    let err = LotConfig::from_json_str(r#"{ "floors": 2 }"#).unwrap_err();
    assert!(err.starts_with("parse error"));
}
