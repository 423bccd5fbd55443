//! # Parking Allocator
//!
//! A concurrent, in-memory allocator that hands out parking spots on a
//! multi-floor lot to vehicles identified by license plate.
//!
//! ## Allocation Model
//!
//! - **Per-floor banks**: each floor is a fixed-length spot bitmap behind its
//!   own `parking_lot::Mutex`. Scan-and-mark runs entirely under that guard,
//!   so two callers can never receive overlapping spots on the same floor.
//! - **First fit, lowest floor first**: bikes and cars take the lowest free
//!   spot; trucks take the lowest pair of *adjacent* free spots. Floors are
//!   tried in ascending order and the first floor that succeeds wins.
//! - **Sharded registry**: plate → assignment lives in a `DashMap`, so parks
//!   and leaves for distinct plates never serialize on one lock.
//! - **No silent overwrite**: parking a plate that is already parked is
//!   rejected and the existing spots are kept.
//!
//! ```
//! use parking_allocator::core::{ParkingLot, VehicleKind};
//!
//! let lot = ParkingLot::new(2, 3);
//! let car = lot.park("A1", VehicleKind::Car).unwrap();
//! assert_eq!((car.floor(), car.spots()), (0, &[0][..]));
//!
//! let truck = lot.park("A2", VehicleKind::Truck).unwrap();
//! assert_eq!(truck.spots(), &[1, 2]);
//!
//! assert!(lot.leave("A2"));
//! assert_eq!(lot.total_available(), 5);
//! ```
//!
//! The `parking_shell` binary wraps a lot in a line-oriented command shell
//! (see [`shell`]).

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Spot banks, the lot allocator, and capacity accounting.
pub mod core;
/// Configuration models for lot dimensions.
pub mod config;
/// Builders to construct lots from configuration.
pub mod builders;
/// Text command shell over a lot.
pub mod shell;
/// Shared utilities.
pub mod util;
