//! Vehicle kinds and the assignment record binding a vehicle to its spots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vehicle category. Determines how many contiguous spots a vehicle needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Occupies a single spot.
    Bike,
    /// Occupies a single spot.
    Car,
    /// Occupies two adjacent spots on the same floor.
    Truck,
}

impl VehicleKind {
    /// Number of contiguous spots this kind occupies.
    #[must_use]
    pub const fn units(self) -> usize {
        match self {
            Self::Bike | Self::Car => 1,
            Self::Truck => 2,
        }
    }

    /// Lowercase token used by the shell and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a vehicle kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle kind `{0}`")]
pub struct UnknownVehicleKind(pub String);

impl FromStr for VehicleKind {
    type Err = UnknownVehicleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "truck" => Ok(Self::Truck),
            _ => Err(UnknownVehicleKind(s.to_string())),
        }
    }
}

/// A live allocation: the floor and the ascending spot indices held on it.
///
/// Only produced by a successful [`SpotBank::allocate`](crate::core::SpotBank::allocate),
/// so the spots are always in bounds and, for trucks, adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    floor: usize,
    spots: Vec<usize>,
}

impl Assignment {
    pub(crate) const fn new(floor: usize, spots: Vec<usize>) -> Self {
        Self { floor, spots }
    }

    /// Floor index the vehicle is parked on.
    #[must_use]
    pub const fn floor(&self) -> usize {
        self.floor
    }

    /// Spot indices held on that floor, ascending.
    #[must_use]
    pub fn spots(&self) -> &[usize] {
        &self.spots
    }

    /// Number of spots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Always false for assignments handed out by a bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}, spots {:?}", self.floor, self.spots)
    }
}
