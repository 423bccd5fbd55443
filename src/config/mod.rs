//! Configuration models for lot dimensions.

pub mod lot;

pub use lot::{LotConfig, FLOORS_ENV, MAX_TOTAL_SPOTS, SPOTS_PER_FLOOR_ENV};
