//! Row and value types for the `cities` and `users_cities` tables.

mod city_record;
mod city_seed;
mod coordinates;

pub use city_record::{CityRecord, UserCityLink};
pub use city_seed::{default_seed, CitySeed};
pub use coordinates::Coordinates;
