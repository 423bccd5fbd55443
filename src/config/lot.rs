//! Lot dimension configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the floor count.
pub const FLOORS_ENV: &str = "PARKING_FLOORS";
/// Environment variable holding the spots per floor.
pub const SPOTS_PER_FLOOR_ENV: &str = "PARKING_SPOTS_PER_FLOOR";
/// Largest lot accepted, counted in spots across all floors.
pub const MAX_TOTAL_SPOTS: usize = 1 << 24;

/// Lot dimensions. Fixed for the life of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of floors.
    pub floors: usize,
    /// Spots on each floor.
    pub spots_per_floor: usize,
}

impl LotConfig {
    /// Validate lot dimensions.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors == 0 {
            return Err("floors must be greater than 0".into());
        }
        if self.spots_per_floor == 0 {
            return Err("spots_per_floor must be greater than 0".into());
        }
        let Some(total) = self.floors.checked_mul(self.spots_per_floor) else {
            return Err("total capacity overflows".into());
        };
        if total > MAX_TOTAL_SPOTS {
            return Err(format!(
                "total capacity {total} exceeds the limit of {MAX_TOTAL_SPOTS} spots"
            ));
        }
        Ok(())
    }

    /// Parse lot configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read dimensions from the process environment, loading `.env` first.
    ///
    /// `Ok(None)` when neither variable is set. A missing `.env` is fine;
    /// one that cannot be read or parsed is an error.
    pub fn from_env() -> Result<Option<Self>, String> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read dimensions through `lookup`, which maps a variable name to its value.
    pub fn from_vars<F>(lookup: F) -> Result<Option<Self>, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (floors, spots) = match (lookup(FLOORS_ENV), lookup(SPOTS_PER_FLOOR_ENV)) {
            (None, None) => return Ok(None),
            (Some(floors), Some(spots)) => (floors, spots),
            (Some(_), None) => return Err(format!("{SPOTS_PER_FLOOR_ENV} must be set with {FLOORS_ENV}")),
            (None, Some(_)) => return Err(format!("{FLOORS_ENV} must be set with {SPOTS_PER_FLOOR_ENV}")),
        };

        let cfg = Self {
            floors: parse_count(FLOORS_ENV, &floors)?,
            spots_per_floor: parse_count(SPOTS_PER_FLOOR_ENV, &spots)?,
        };
        cfg.validate()?;
        Ok(Some(cfg))
    }
}

fn check_dotenv<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), String> {
    match loaded {
        Err(e) if !e.not_found() => Err(format!("failed to load .env: {e}")),
        _ => Ok(()),
    }
}

fn parse_count(name: &str, raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse()
        .map_err(|e| format!("{name}=`{raw}` is not a count: {e}"))
}
