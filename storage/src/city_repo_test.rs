//! Unit tests for CityRepository internals: table creation, seeding, link rows.

use crate::{CityDirectory, CityRepository, CitySeed};

async fn memory_repo() -> CityRepository {
    CityRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

fn seed(city: &str, lat: f64, lng: f64) -> CitySeed {
    CitySeed {
        city: city.to_string(),
        lat,
        lng,
    }
}

#[tokio::test]
async fn test_create_tables_is_idempotent() {
    let repo = memory_repo().await;
    repo.create_tables().await.expect("second create must succeed");
    assert_eq!(repo.count_cities().await.unwrap(), 0);
}

#[tokio::test]
async fn test_seed_cities_skips_existing_names() {
    let repo = memory_repo().await;
    repo.insert_city("Paris", 48.8566, 2.3522).await.unwrap();

    let inserted = repo
        .seed_cities(&[seed("Paris", 0.0, 0.0), seed("London", 51.5074, -0.1278)])
        .await
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(repo.count_cities().await.unwrap(), 2);

    // Existing row keeps its original coordinates.
    let paris = repo.find_city("Paris").await.unwrap().unwrap();
    assert!((paris.lat - 48.8566).abs() < 1e-9);
}

#[tokio::test]
async fn test_seed_cities_twice_inserts_nothing_new() {
    let repo = memory_repo().await;
    let seeds = crate::default_seed().unwrap();

    let first = repo.seed_cities(&seeds).await.unwrap();
    let second = repo.seed_cities(&seeds).await.unwrap();

    assert_eq!(first, seeds.len());
    assert_eq!(second, 0);
}

#[tokio::test]
async fn test_add_city_twice_stores_duplicate_links() {
    let repo = memory_repo().await;
    let id = repo.insert_city("Paris", 48.8566, 2.3522).await.unwrap();

    assert!(repo.add_city(7, "Paris").await.unwrap());
    assert!(repo.add_city(7, "Paris").await.unwrap());

    let links = repo.list_links(7).await.unwrap();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l.user_id == 7 && l.city_id == id));
    assert_eq!(repo.select_cities(7).await.unwrap(), vec!["Paris", "Paris"]);
}

#[tokio::test]
async fn test_find_city_returns_record() {
    let repo = memory_repo().await;
    let id = repo.insert_city("Tokyo", 35.6762, 139.6503).await.unwrap();

    let record = repo.find_city("Tokyo").await.unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.city, "Tokyo");
    assert_eq!(record.coordinates(), crate::Coordinates::new(35.6762, 139.6503));
}
