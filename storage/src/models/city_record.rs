//! City and saved-city link rows.
//!
//! Map to the `cities` and `users_cities` tables used by CityRepository.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// One row of `cities`. The name is matched exactly (case and spacing included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CityRecord {
    pub id: i64,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

impl CityRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// One row of `users_cities`: "this user saved this city". Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserCityLink {
    pub user_id: i64,
    pub city_id: i64,
}
