//! Reference city data used to populate the `cities` table.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// One seed entry; field names match the JSON seed file (`city`, `lat`, `lng`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySeed {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

impl CitySeed {
    /// Parses a JSON array of seed entries.
    pub fn parse_list(json: &str) -> Result<Vec<CitySeed>, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Embedded world capitals and large cities.
const DEFAULT_CITIES_JSON: &str = include_str!("../cities.json");

/// Returns the embedded seed list.
pub fn default_seed() -> Result<Vec<CitySeed>, StorageError> {
    CitySeed::parse_list(DEFAULT_CITIES_JSON)
}
