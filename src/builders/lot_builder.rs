//! Builder to construct a lot from configuration.

use crate::config::LotConfig;
use crate::core::{AuditSink, LotError, ParkingLot};

/// Collects lot dimensions and an optional audit sink, then validates on build.
#[derive(Default)]
pub struct LotBuilder {
    floors: usize,
    spots_per_floor: usize,
    audit: Option<Box<dyn AuditSink>>,
}

impl LotBuilder {
    /// Start with no floors and no spots; both must be set before `build`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from validated-or-not configuration values.
    #[must_use]
    pub fn from_config(cfg: &LotConfig) -> Self {
        Self::new()
            .with_floors(cfg.floors)
            .with_spots_per_floor(cfg.spots_per_floor)
    }

    /// Set the number of floors.
    #[must_use]
    pub fn with_floors(mut self, floors: usize) -> Self {
        self.floors = floors;
        self
    }

    /// Set the spots on each floor.
    #[must_use]
    pub fn with_spots_per_floor(mut self, spots_per_floor: usize) -> Self {
        self.spots_per_floor = spots_per_floor;
        self
    }

    /// Attach an audit sink to the built lot.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Configuration the builder currently holds.
    #[must_use]
    pub const fn config(&self) -> LotConfig {
        LotConfig {
            floors: self.floors,
            spots_per_floor: self.spots_per_floor,
        }
    }

    /// Validate and construct the lot.
    ///
    /// # Errors
    ///
    /// [`LotError::InvalidConfig`] when a dimension is zero or the total
    /// capacity overflows.
    pub fn build(self) -> Result<ParkingLot, LotError> {
        let cfg = self.config();
        cfg.validate().map_err(LotError::InvalidConfig)?;

        let lot = ParkingLot::new(cfg.floors, cfg.spots_per_floor);
        Ok(match self.audit {
            Some(audit) => lot.with_audit(audit),
            None => lot,
        })
    }
}
