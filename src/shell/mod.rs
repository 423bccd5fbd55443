//! Text command shell over a [`ParkingLot`](crate::core::ParkingLot).
//!
//! A thin adapter: it parses lines, calls lot operations, and renders
//! replies. The allocation engine never depends on it.

pub mod command;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{LotState, Outcome, Session};
