//! City repository: SQLite-backed [`CityDirectory`] plus reference-data seeding.
//!
//! Tables: `cities(id, city, lat, lng)` and `users_cities(user_id, city_id)`.

use crate::error::StorageError;
use crate::models::{CityRecord, CitySeed, Coordinates, UserCityLink};
use crate::repository::CityDirectory;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CityRepository {
    pool_manager: SqlitePoolManager,
}

impl CityRepository {
    /// Opens (or creates) the database and makes sure both tables exist.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.create_tables().await?;
        Ok(repo)
    }

    /// Creates `cities` and `users_cities` if they do not exist. Safe to call repeatedly.
    pub async fn create_tables(&self) -> Result<(), StorageError> {
        info!("Creating city tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                city TEXT NOT NULL,
                lat REAL NOT NULL,
                lng REAL NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users_cities (
                user_id INTEGER,
                city_id INTEGER,
                FOREIGN KEY(city_id) REFERENCES cities(id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_cities_city ON cities(city)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_cities_user_id ON users_cities(user_id)")
            .execute(pool)
            .await?;

        info!("City tables created successfully");
        Ok(())
    }

    /// Inserts one city row and returns its id. Does not check for an existing row with the same name.
    pub async fn insert_city(&self, city: &str, lat: f64, lng: f64) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("INSERT INTO cities (city, lat, lng) VALUES (?, ?, ?)")
            .bind(city)
            .bind(lat)
            .bind(lng)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!(city = %city, id, "Inserted city");
        Ok(id)
    }

    /// Inserts every seed entry whose name is not stored yet, in one transaction.
    /// Returns how many rows were added.
    #[instrument(skip(self, seeds), fields(count = seeds.len()))]
    pub async fn seed_cities(&self, seeds: &[CitySeed]) -> Result<usize, StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;
        let mut inserted = 0;

        for seed in seeds {
            let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM cities WHERE city = ?")
                .bind(&seed.city)
                .fetch_optional(&mut *tx)
                .await?;
            if existing.is_some() {
                continue;
            }

            sqlx::query("INSERT INTO cities (city, lat, lng) VALUES (?, ?, ?)")
                .bind(&seed.city)
                .bind(seed.lat)
                .bind(seed.lng)
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }

        tx.commit().await?;

        info!(inserted, skipped = seeds.len() - inserted, "Seeded cities");
        Ok(inserted)
    }

    pub async fn count_cities(&self) -> Result<i64, StorageError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cities")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(total.0)
    }

    /// Full row for an exact name match.
    pub async fn find_city(&self, city_name: &str) -> Result<Option<CityRecord>, StorageError> {
        let record = sqlx::query_as::<_, CityRecord>(
            "SELECT id, city, lat, lng FROM cities WHERE city = ?",
        )
        .bind(city_name)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        Ok(record)
    }

    /// Raw link rows for a user, duplicates included, in insertion order.
    pub async fn list_links(&self, user_id: i64) -> Result<Vec<UserCityLink>, StorageError> {
        let links = sqlx::query_as::<_, UserCityLink>(
            "SELECT user_id, city_id FROM users_cities WHERE user_id = ? ORDER BY rowid",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(links)
    }
}

#[async_trait]
impl CityDirectory for CityRepository {
    #[instrument(skip(self))]
    async fn get_coordinates(&self, city_name: &str) -> Result<Option<Coordinates>, StorageError> {
        let coordinates = sqlx::query_as::<_, Coordinates>(
            "SELECT lat, lng FROM cities WHERE city = ?",
        )
        .bind(city_name)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        debug!(found = coordinates.is_some(), "Coordinates lookup");
        Ok(coordinates)
    }

    #[instrument(skip(self))]
    async fn add_city(&self, user_id: i64, city_name: &str) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let city_id: Option<(i64,)> = sqlx::query_as("SELECT id FROM cities WHERE city = ?")
            .bind(city_name)
            .fetch_optional(pool)
            .await?;

        let Some((city_id,)) = city_id else {
            info!("City not found, nothing saved");
            return Ok(false);
        };

        sqlx::query("INSERT INTO users_cities (user_id, city_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(city_id)
            .execute(pool)
            .await?;

        info!(city_id, "Saved city for user");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn select_cities(&self, user_id: i64) -> Result<Vec<String>, StorageError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT cities.city
            FROM users_cities
            JOIN cities ON users_cities.city_id = cities.id
            WHERE users_cities.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!("Retrieved {} saved cities", rows.len());
        Ok(rows.into_iter().map(|(city,)| city).collect())
    }
}
