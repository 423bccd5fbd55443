//! Tests for audit sink

use parking_allocator::core::{
    build_lot_event, AuditSink, InMemoryAuditSink, LotAction, ParkingLot, VehicleKind,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_lot_event("KA-01", LotAction::Left, None, Some("note".to_string()));

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].vehicle_id, "KA-01");
    assert_eq!(events[0].action, LotAction::Left);
    assert_eq!(events[0].floor, None);
    assert!(events[0].spots.is_empty());
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_lot_event("v1", LotAction::Parked, None, None));
    sink.record(build_lot_event("v2", LotAction::Parked, None, None));
    sink.record(build_lot_event("v3", LotAction::Parked, None, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].vehicle_id, "v2"); // First one popped
    assert_eq!(events[1].vehicle_id, "v3");
}

#[test]
fn test_zero_sized_sink_keeps_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_lot_event("v1", LotAction::Parked, None, None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_build_lot_event_from_assignment() {
    let lot = ParkingLot::new(1, 4);
    let assignment = lot.park("T1", VehicleKind::Truck).unwrap();

    let event = build_lot_event("T1", LotAction::Parked, Some(&assignment), None);

    assert_eq!(event.vehicle_id, "T1");
    assert_eq!(event.floor, Some(0));
    assert_eq!(event.spots, vec![0, 1]);
    assert_eq!(event.detail, None);
    assert!(event.created_at_ms > 0);
    assert_eq!(event.event_id.len(), 36);
}

#[test]
fn test_event_ids_are_unique() {
    let a = build_lot_event("v", LotAction::Parked, None, None);
    let b = build_lot_event("v", LotAction::Parked, None, None);
    assert_ne!(a.event_id, b.event_id);
}

#[test]
fn test_event_serializes_action_snake_case() {
    let event = build_lot_event("v", LotAction::Rejected, None, None);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "rejected");
}
