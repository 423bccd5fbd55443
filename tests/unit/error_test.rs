//! Tests for error types

use parking_allocator::core::{LotError, VehicleKind};

#[test]
fn test_capacity_exhausted_error() {
    let err = LotError::CapacityExhausted {
        kind: VehicleKind::Truck,
    };
    assert_eq!(format!("{}", err), "no capacity for truck");
}

#[test]
fn test_already_parked_error() {
    let err = LotError::AlreadyParked("KA-01-1234".to_string());
    assert_eq!(format!("{}", err), "vehicle KA-01-1234 is already parked");
}

#[test]
fn test_not_initialized_error() {
    let err = LotError::NotInitialized;
    assert_eq!(format!("{}", err), "parking lot has not been created");
}

#[test]
fn test_invalid_config_error() {
    let err = LotError::InvalidConfig("floors must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: floors must be greater than 0"
    );
}

#[test]
fn test_lot_error_converts_to_anyhow() {
    let result: parking_allocator::core::AppResult<()> = Err(LotError::NotInitialized.into());
    assert!(result.unwrap_err().downcast_ref::<LotError>().is_some());
}
