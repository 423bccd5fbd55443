//! Tests for builder modules

use parking_allocator::builders::LotBuilder;
use parking_allocator::config::LotConfig;
use parking_allocator::core::{InMemoryAuditSink, LotError, VehicleKind};

#[test]
fn test_lot_builder_from_config() {
    let config = LotConfig {
        floors: 4,
        spots_per_floor: 10,
    };

    let builder = LotBuilder::from_config(&config);
    assert_eq!(builder.config(), config);

    let lot = builder.build().unwrap();
    assert_eq!(lot.floor_count(), 4);
    assert_eq!(lot.spots_per_floor(), 10);
    assert_eq!(lot.capacity(), 40);
    assert_eq!(lot.total_available(), 40);
}

#[test]
fn test_lot_builder_requires_dimensions() {
    let err = LotBuilder::new().with_floors(2).build().unwrap_err();
    assert_eq!(
        err,
        LotError::InvalidConfig("spots_per_floor must be greater than 0".to_string())
    );
}

#[test]
fn test_lot_builder_with_audit() {
    let lot = LotBuilder::new()
        .with_floors(1)
        .with_spots_per_floor(2)
        .with_audit(Box::new(InMemoryAuditSink::new(8)))
        .build()
        .unwrap();

    assert!(lot.park("B1", VehicleKind::Bike).is_ok());
    assert!(format!("{:?}", lot).contains("audit: true"));
}
