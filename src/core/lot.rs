//! Multi-floor lot: floor selection and the vehicle registry.
//!
//! Each floor is guarded only by its own [`SpotBank`] mutex, so parks that
//! land on different floors run in parallel. The registry is a sharded
//! `DashMap`, so distinct plates never contend on one global lock.

use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::assignment::{Assignment, VehicleKind};
use crate::core::audit::{build_lot_event, AuditSink, LotAction};
use crate::core::error::LotError;
use crate::core::spot_bank::SpotBank;

/// Point-in-time view of lot occupancy.
///
/// Floors are read one after another, so the numbers are per-floor
/// consistent but not a single atomic picture of the whole lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSnapshot {
    /// Number of floors.
    pub floors: usize,
    /// Spots on each floor.
    pub spots_per_floor: usize,
    /// Free spots per floor, indexed by floor.
    pub available_per_floor: Vec<usize>,
    /// Sum of `available_per_floor`.
    pub total_available: usize,
    /// Free adjacent pairs across all floors.
    pub truck_pairs_available: usize,
    /// Vehicles currently registered.
    pub parked: usize,
}

/// The lot: ordered floors plus the plate-to-assignment registry.
pub struct ParkingLot {
    banks: Vec<SpotBank>,
    spots_per_floor: usize,
    registry: DashMap<String, Assignment>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl ParkingLot {
    /// Create a lot of `floors` floors with `spots_per_floor` free spots each.
    #[must_use]
    pub fn new(floors: usize, spots_per_floor: usize) -> Self {
        info!(floors, spots_per_floor, "creating parking lot");
        Self {
            banks: (0..floors)
                .map(|floor| SpotBank::new(floor, spots_per_floor))
                .collect(),
            spots_per_floor,
            registry: DashMap::new(),
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Park `vehicle_id` on the lowest floor that can fit `kind`.
    ///
    /// Floors are tried in ascending order and the first one that allocates
    /// wins. A plate that is already registered is rejected and keeps its
    /// current spots.
    ///
    /// # Errors
    ///
    /// [`LotError::AlreadyParked`] if the plate holds a live assignment,
    /// [`LotError::CapacityExhausted`] if no floor has room. In both cases
    /// the lot is left as it was.
    pub fn park(&self, vehicle_id: &str, kind: VehicleKind) -> Result<Assignment, LotError> {
        if self.registry.contains_key(vehicle_id) {
            return Err(self.reject(vehicle_id, LotError::AlreadyParked(vehicle_id.to_string())));
        }

        let Some(assignment) = self.banks.iter().find_map(|bank| {
            bank.allocate(kind)
                .map(|spots| Assignment::new(bank.floor(), spots))
        }) else {
            return Err(self.reject(vehicle_id, LotError::CapacityExhausted { kind }));
        };

        let registered = match self.registry.entry(vehicle_id.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(assignment.clone());
                true
            }
        };
        if !registered {
            // A concurrent park of the same plate registered first.
            self.banks[assignment.floor()].release(assignment.spots());
            return Err(self.reject(vehicle_id, LotError::AlreadyParked(vehicle_id.to_string())));
        }

        info!(vehicle_id, %kind, floor = assignment.floor(), spots = ?assignment.spots(), "vehicle parked");
        self.record(vehicle_id, LotAction::Parked, Some(&assignment), None);
        Ok(assignment)
    }

    /// Remove `vehicle_id` and free its spots. Returns false if it was not parked.
    pub fn leave(&self, vehicle_id: &str) -> bool {
        let Some((_, assignment)) = self.registry.remove(vehicle_id) else {
            debug!(vehicle_id, "leave for unknown vehicle");
            return false;
        };

        let freed = self.banks[assignment.floor()].release(assignment.spots());
        debug_assert_eq!(freed, assignment.len(), "registry and bank diverged");

        info!(vehicle_id, floor = assignment.floor(), spots = ?assignment.spots(), "vehicle left");
        self.record(vehicle_id, LotAction::Left, Some(&assignment), None);
        true
    }

    /// Current assignment of `vehicle_id`, if parked. Touches no bank.
    #[must_use]
    pub fn locate(&self, vehicle_id: &str) -> Option<Assignment> {
        self.registry.get(vehicle_id).map(|entry| entry.value().clone())
    }

    /// Free spots on `floor`; 0 for a floor that does not exist.
    #[must_use]
    pub fn available_count(&self, floor: usize) -> usize {
        self.banks.get(floor).map_or(0, SpotBank::available_count)
    }

    /// Free spots across all floors.
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.banks.iter().map(SpotBank::available_count).sum()
    }

    /// True when no floor has a free spot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.banks.iter().all(|bank| bank.available_count() == 0)
    }

    /// Free adjacent pairs across all floors.
    ///
    /// Upper bound on simultaneous truck admissions: overlapping pairs are
    /// each counted.
    #[must_use]
    pub fn truck_capacity_available(&self) -> usize {
        self.banks.iter().map(SpotBank::consecutive_free_pairs).sum()
    }

    /// Number of floors.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.banks.len()
    }

    /// Spots on each floor.
    #[must_use]
    pub const fn spots_per_floor(&self) -> usize {
        self.spots_per_floor
    }

    /// Total spots in the lot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.banks.len() * self.spots_per_floor
    }

    /// Vehicles currently registered.
    #[must_use]
    pub fn parked_count(&self) -> usize {
        self.registry.len()
    }

    /// Read access to one floor's bank.
    #[must_use]
    pub fn floor(&self, floor: usize) -> Option<&SpotBank> {
        self.banks.get(floor)
    }

    /// Occupancy summary.
    #[must_use]
    pub fn snapshot(&self) -> LotSnapshot {
        let available_per_floor: Vec<usize> =
            self.banks.iter().map(SpotBank::available_count).collect();
        LotSnapshot {
            floors: self.banks.len(),
            spots_per_floor: self.spots_per_floor,
            total_available: available_per_floor.iter().sum(),
            available_per_floor,
            truck_pairs_available: self.truck_capacity_available(),
            parked: self.registry.len(),
        }
    }

    fn reject(&self, vehicle_id: &str, err: LotError) -> LotError {
        warn!(vehicle_id, error = %err, "park rejected");
        self.record(vehicle_id, LotAction::Rejected, None, Some(err.to_string()));
        err
    }

    fn record(
        &self,
        vehicle_id: &str,
        action: LotAction,
        assignment: Option<&Assignment>,
        detail: Option<String>,
    ) {
        if let Some(sink) = self.audit.as_ref() {
            sink.lock()
                .record(build_lot_event(vehicle_id, action, assignment, detail));
        }
    }
}

impl fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLot")
            .field("floors", &self.banks.len())
            .field("spots_per_floor", &self.spots_per_floor)
            .field("parked", &self.registry.len())
            .field("audit", &self.audit.is_some())
            .finish()
    }
}
