//! Integration tests for the CLI wiring: seeding, rendering to files, and the full handler chain
//! driven with fake messages and a recording bot (no Telegram connection).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use map_renderer::{MapRenderer, MarkerColor};
use mapbot_cli::{build_handler_chain, open_directory, render_cities, resolve_output, seed_cities, MapConfig};
use mapbot_core::{Bot, Chat, HandlerResponse, Message, Photo, User};

#[derive(Default)]
struct RecordingBot {
    photos: Mutex<Vec<Photo>>,
    texts: Mutex<Vec<String>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> mapbot_core::Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_photo(&self, _chat: &Chat, photo: Photo, _caption: Option<&str>) -> mapbot_core::Result<()> {
        self.photos.lock().unwrap().push(photo);
        Ok(())
    }
}

fn map_config(output_dir: PathBuf) -> MapConfig {
    MapConfig {
        output_dir,
        basemap_dir: None,
        font_path: None,
        default_marker_color: "red".to_string(),
    }
}

fn message(content: &str) -> Message {
    Message {
        id: "7".to_string(),
        user: User {
            id: 77,
            username: None,
            first_name: Some("Lin".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 77,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// **Test: built-in seeding is idempotent.**
///
/// **Setup:** Empty in-memory directory.
/// **Action:** seed twice with the built-in list.
/// **Expected:** first run adds every city, second adds none; Paris resolves.
#[tokio::test]
async fn test_seed_builtin_twice() {
    let repo = open_directory("sqlite::memory:").await.unwrap();

    let first = seed_cities(&repo, None).await.unwrap();
    let second = seed_cities(&repo, None).await.unwrap();

    assert!(first > 20);
    assert_eq!(second, 0);
    assert!(repo.find_city("Paris").await.unwrap().is_some());
}

/// **Test: seeding from a JSON file; out-of-range coordinates are rejected.**
#[tokio::test]
async fn test_seed_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("cities.json");
    std::fs::write(&good, r#"[{"city":"Atlantis","lat":31.0,"lng":-24.0}]"#).unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"[{"city":"Nowhere","lat":123.0,"lng":0.0}]"#).unwrap();
    let repo = open_directory("sqlite::memory:").await.unwrap();

    assert_eq!(seed_cities(&repo, Some(&good)).await.unwrap(), 1);
    assert!(seed_cities(&repo, Some(&bad)).await.is_err());
    assert_eq!(repo.count_cities().await.unwrap(), 1);
}

/// **Test: render_cities writes labeled and distance maps.**
///
/// **Setup:** Built-in cities; temp output dir.
/// **Action:** render Paris+London+Atlantis, then the Paris–London distance, then a distance with one city.
/// **Expected:** 2 cities drawn; both files exist; the single-city distance is an error.
#[tokio::test]
async fn test_render_cities_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = open_directory("sqlite::memory:").await.unwrap();
    seed_cities(&repo, None).await.unwrap();
    let cities = vec!["Paris".to_string(), "London".to_string(), "Atlantis".to_string()];
    let output = dir.path().join("cities.png");

    let drawn = render_cities(repo.clone(), MapRenderer::default(), &cities, &output, &MarkerColor::default(), false)
        .await
        .unwrap();
    assert_eq!(drawn, 2);
    assert!(output.exists());

    let distance = dir.path().join("distance.png");
    render_cities(repo.clone(), MapRenderer::default(), &cities[..2], &distance, &MarkerColor::default(), true)
        .await
        .unwrap();
    assert!(distance.exists());

    let result = render_cities(repo, MapRenderer::default(), &cities[..1], &distance, &MarkerColor::default(), true).await;
    assert!(result.is_err());
}

/// **Test: bare output names land in the map output directory.**
#[test]
fn test_resolve_output() {
    let map = map_config(PathBuf::from("/srv/maps"));
    assert_eq!(resolve_output(&map, &PathBuf::from("map.png")), PathBuf::from("/srv/maps/map.png"));
    assert_eq!(resolve_output(&map, &PathBuf::from("out/map.png")), PathBuf::from("out/map.png"));
    assert_eq!(resolve_output(&map, &PathBuf::from("/tmp/map.png")), PathBuf::from("/tmp/map.png"));
}

/// **Test: the assembled chain answers commands end to end.**
///
/// **Setup:** Built-in cities; chain with LoggingHandler + MapCommandHandler and a recording bot.
/// **Action:** "/distance Paris London", "/show_city Tokyo", "just chatting".
/// **Expected:** two photos sent (Stop each time); plain text passes through as Continue.
#[tokio::test]
async fn test_handler_chain_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let repo = open_directory("sqlite::memory:").await.unwrap();
    seed_cities(&repo, None).await.unwrap();
    let bot = Arc::new(RecordingBot::default());
    let map = map_config(dir.path().to_path_buf());

    let chain = build_handler_chain(bot.clone(), repo, MapRenderer::default(), &map, Some("city_map_bot".to_string()))
        .unwrap();

    assert_eq!(chain.handle(&message("/distance Paris London")).await.unwrap(), HandlerResponse::Stop);
    assert_eq!(chain.handle(&message("/show_city Tokyo")).await.unwrap(), HandlerResponse::Stop);
    assert_eq!(chain.handle(&message("just chatting")).await.unwrap(), HandlerResponse::Continue);

    let photos = bot.photos.lock().unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[1], Photo::File(dir.path().join("Tokyo_map.png")));
    assert!(bot.texts.lock().unwrap().is_empty());
}
