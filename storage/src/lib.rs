//! Storage crate: the city directory (city coordinates and per-user saved cities).
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – CityRecord, UserCityLink, Coordinates, CitySeed
//! - [`repository`] – CityDirectory trait
//! - [`city_repo`] – CityRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod city_repo;
mod error;
mod models;
mod repository;
mod sqlite_pool;

#[cfg(test)]
mod city_repo_test;

pub use city_repo::CityRepository;
pub use error::StorageError;
pub use models::{default_seed, CityRecord, CitySeed, Coordinates, UserCityLink};
pub use repository::CityDirectory;
pub use sqlite_pool::SqlitePoolManager;
