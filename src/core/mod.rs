//! Spot allocation engine: per-floor banks, the lot, and its audit trail.

pub mod assignment;
pub mod audit;
pub mod error;
pub mod lot;
pub mod spot_bank;

pub use assignment::{Assignment, UnknownVehicleKind, VehicleKind};
pub use audit::{build_lot_event, AuditSink, InMemoryAuditSink, LotAction, LotEvent};
pub use error::{AppResult, LotError};
pub use lot::{LotSnapshot, ParkingLot};
pub use spot_bank::SpotBank;
