use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Coordinates;

/// Name → coordinate lookups and per-user saved cities.
///
/// "Not found" is a normal outcome (`None` / `false`); `Err` means the store itself failed.
#[async_trait]
pub trait CityDirectory: Send + Sync {
    /// Exact-match lookup on the stored city name. No case or whitespace normalization.
    async fn get_coordinates(&self, city_name: &str) -> Result<Option<Coordinates>, StorageError>;

    /// Links `city_name` to `user_id` if the city exists. Returns false when it does not.
    /// Saving the same city twice stores two links.
    async fn add_city(&self, user_id: i64, city_name: &str) -> Result<bool, StorageError>;

    /// Names of every city linked to `user_id`, in store order. Empty when the user saved nothing.
    async fn select_cities(&self, user_id: i64) -> Result<Vec<String>, StorageError>;
}
