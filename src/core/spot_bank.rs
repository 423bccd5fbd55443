//! Per-floor spot bitmap guarded by a single `parking_lot::Mutex`.
//!
//! Every operation, reads included, takes the floor guard for the length of
//! one bounded scan. That serializes allocate and release on the same floor
//! while leaving different floors fully independent.

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::core::assignment::VehicleKind;

/// Fixed-capacity set of spots on one floor.
#[derive(Debug)]
pub struct SpotBank {
    floor: usize,
    capacity: usize,
    /// `true` means occupied. Length is fixed at construction.
    occupied: Mutex<Box<[bool]>>,
}

impl SpotBank {
    /// Create a bank for `floor` with `capacity` free spots.
    #[must_use]
    pub fn new(floor: usize, capacity: usize) -> Self {
        Self {
            floor,
            capacity,
            occupied: Mutex::new(vec![false; capacity].into_boxed_slice()),
        }
    }

    /// Floor index this bank belongs to.
    #[must_use]
    pub const fn floor(&self) -> usize {
        self.floor
    }

    /// Number of spots on the floor.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reserve the lowest-indexed run of free spots that fits `kind`.
    ///
    /// Single-spot kinds take the first free spot. Trucks take the first
    /// pair `(i, i + 1)` where both are free; two free spots that are not
    /// adjacent do not count. Returns `None` when nothing fits.
    pub fn allocate(&self, kind: VehicleKind) -> Option<Vec<usize>> {
        let need = kind.units();
        let mut occupied = self.occupied.lock();
        let start = occupied
            .windows(need)
            .position(|run| run.iter().all(|taken| !taken))?;
        occupied[start..start + need].fill(true);
        drop(occupied);

        let spots: Vec<usize> = (start..start + need).collect();
        debug!(floor = self.floor, %kind, ?spots, "allocated spots");
        Some(spots)
    }

    /// Mark the given spots free. Indices past the end are ignored.
    ///
    /// Returns how many spots actually changed from occupied to free.
    pub fn release(&self, spots: &[usize]) -> usize {
        let mut occupied = self.occupied.lock();
        let mut freed = 0;
        for &spot in spots {
            match occupied.get_mut(spot) {
                Some(taken) => {
                    if *taken {
                        freed += 1;
                    }
                    *taken = false;
                }
                None => warn!(floor = self.floor, spot, "ignoring release of out-of-range spot"),
            }
        }
        drop(occupied);

        debug!(floor = self.floor, ?spots, freed, "released spots");
        freed
    }

    /// Count of free spots, read under the guard.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.occupied.lock().iter().filter(|taken| !**taken).count()
    }

    /// Count of adjacent pairs that are both free.
    ///
    /// Overlapping pairs are each counted, so this is an upper bound on how
    /// many trucks the floor could still take at once.
    #[must_use]
    pub fn consecutive_free_pairs(&self) -> usize {
        self.occupied
            .lock()
            .windows(2)
            .filter(|pair| !pair[0] && !pair[1])
            .count()
    }

    /// Whether `spot` is free, or `None` if it is out of range.
    #[must_use]
    pub fn is_free(&self, spot: usize) -> Option<bool> {
        self.occupied.lock().get(spot).map(|taken| !taken)
    }
}
