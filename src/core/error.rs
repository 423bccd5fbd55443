//! Error types for lot operations.

use thiserror::Error;

use crate::core::assignment::VehicleKind;

/// Errors produced by lot components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// No floor has room for the requested vehicle kind.
    #[error("no capacity for {kind}")]
    CapacityExhausted {
        /// Kind that could not be placed.
        kind: VehicleKind,
    },
    /// The vehicle identifier already holds a live assignment.
    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),
    /// A lot operation ran before the lot was created.
    #[error("parking lot has not been created")]
    NotInitialized,
    /// Lot dimensions were rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
