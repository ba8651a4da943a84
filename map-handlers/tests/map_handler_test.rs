//! Integration tests for [`map_handlers::MapCommandHandler`].
//!
//! Uses an in-memory SQLite directory seeded with Paris and London, the embedded basemap
//! and a recording bot that captures every text and photo sent.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use map_handlers::{MapCommandHandler, SessionStore};
use map_renderer::{CityMapRenderer, MapRenderer};
use tiny_skia::Pixmap;
use mapbot_core::{Bot, Chat, Handler, HandlerResponse, Message, Photo, User};
use storage::{CityDirectory, CityRepository, Coordinates, StorageError};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Text(String),
    Photo(Photo),
}

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> mapbot_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_photo(&self, _chat: &Chat, photo: Photo, _caption: Option<&str>) -> mapbot_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Photo(photo));
        Ok(())
    }
}

struct Fixture {
    handler: MapCommandHandler,
    bot: Arc<RecordingBot>,
    dir: tempfile::TempDir,
}

async fn fixture() -> Fixture {
    let repo = CityRepository::new("sqlite::memory:").await.unwrap();
    repo.insert_city("Paris", 48.8566, 2.3522).await.unwrap();
    repo.insert_city("London", 51.5074, -0.1278).await.unwrap();
    repo.insert_city("New York", 40.7128, -74.006).await.unwrap();
    let directory = Arc::new(repo);

    let bot = Arc::new(RecordingBot::default());
    let dir = tempfile::tempdir().unwrap();
    let maps = CityMapRenderer::new(directory.clone(), MapRenderer::default());
    let handler = MapCommandHandler::new(
        bot.clone(),
        directory,
        maps,
        Arc::new(SessionStore::default()),
        dir.path(),
    )
    .with_bot_username("city_map_bot");

    Fixture { handler, bot, dir }
}

fn message(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: Some("ada_l".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1000 + user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Directory whose database is gone: every call fails.
struct BrokenDirectory;

#[async_trait]
impl CityDirectory for BrokenDirectory {
    async fn get_coordinates(&self, _city_name: &str) -> Result<Option<Coordinates>, StorageError> {
        Err(StorageError::Database("no such table: cities".to_string()))
    }

    async fn add_city(&self, _user_id: i64, _city_name: &str) -> Result<bool, StorageError> {
        Err(StorageError::Database("no such table: cities".to_string()))
    }

    async fn select_cities(&self, _user_id: i64) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Database("no such table: users_cities".to_string()))
    }
}

/// RGB at the marker position for (`lat`, `lon`) in an encoded map.
fn marker_rgb(png: &[u8], lat: f64, lon: f64) -> (u8, u8, u8) {
    let pixmap = Pixmap::decode_png(png).unwrap();
    let (x, y) = MapRenderer::frame().project(lon, lat);
    let pixel = pixmap.pixel(x as u32, y as u32).unwrap().demultiply();
    (pixel.red(), pixel.green(), pixel.blue())
}

fn photo_bytes(sent: &Sent) -> Vec<u8> {
    match sent {
        Sent::Photo(Photo::Bytes { data, .. }) => data.clone(),
        Sent::Photo(Photo::File(path)) => std::fs::read(path).unwrap(),
        other => panic!("expected a photo, got {:?}", other),
    }
}

fn reply_text(response: HandlerResponse) -> String {
    match response {
        HandlerResponse::Reply(text) => text,
        other => panic!("expected Reply, got {:?}", other),
    }
}

/// **Test: plain text is not ours.**
#[tokio::test]
async fn test_non_command_continues() {
    let f = fixture().await;

    let response = f.handler.handle(&message(1, "hello")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(f.bot.take().is_empty());
}

/// **Test: /start greets the user by first name.**
#[tokio::test]
async fn test_start_greets_user() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(1, "/start")).await.unwrap());

    assert!(text.starts_with("Hello, Ada."));
    assert_eq!(f.bot.take(), vec![Sent::Text(text)]);
}

/// **Test: remember_city then show_my_cities renders the saved cities.**
///
/// **Setup:** Directory with Paris, London, New York.
/// **Action:** remember "New York" and "Paris", then /show_my_cities.
/// **Expected:** two success replies; a photo file `<user_id>_cities_map.png` that is a PNG.
#[tokio::test]
async fn test_remember_then_show_my_cities() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(5, "/remember_city New York")).await.unwrap());
    assert_eq!(text, "New York was saved successfully!");
    f.handler.handle(&message(5, "!remember_city Paris")).await.unwrap();
    f.bot.take();

    let response = f.handler.handle(&message(5, "/show_my_cities")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    let expected = f.dir.path().join("5_cities_map.png");
    assert_eq!(f.bot.take(), vec![Sent::Photo(Photo::File(expected.clone()))]);
    assert!(std::fs::read(expected).unwrap().starts_with(PNG_SIGNATURE));
}

/// **Test: remember_city with an unknown city replies with the not-found hint.**
#[tokio::test]
async fn test_remember_unknown_city() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(1, "/remember_city Atlantis")).await.unwrap());

    assert!(text.starts_with("Atlantis was not found"));
}

/// **Test: show_my_cities without saved cities replies with a hint, no image.**
#[tokio::test]
async fn test_show_my_cities_empty() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(9, "/show_my_cities")).await.unwrap());

    assert!(text.contains("/remember_city"));
    assert!(!f.dir.path().join("9_cities_map.png").exists());
}

/// **Test: show_city renders `<city>_map.png`; empty and unknown names get messages.**
#[tokio::test]
async fn test_show_city() {
    let f = fixture().await;

    let response = f.handler.handle(&message(1, "/show_city@city_map_bot London")).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    assert!(f.dir.path().join("London_map.png").exists());

    let text = reply_text(f.handler.handle(&message(1, "/show_city")).await.unwrap());
    assert!(text.contains("/show_city Paris"));

    let text = reply_text(f.handler.handle(&message(1, "/show_city Atlantis")).await.unwrap());
    assert!(text.starts_with("Atlantis was not found"));
    assert!(!f.dir.path().join("Atlantis_map.png").exists());
}

/// **Test: distance sends the PNG bytes; bad input and unknown cities get messages.**
///
/// **Setup:** Directory with Paris and London.
/// **Action:** `/distance Paris London`, `/distance Paris`, `/distance Paris Atlantis`.
/// **Expected:** photo bytes named distance_map.png; usage hint; not-found reply for Atlantis.
#[tokio::test]
async fn test_distance() {
    let f = fixture().await;

    let response = f.handler.handle(&message(1, "/distance Paris London")).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    match f.bot.take().as_slice() {
        [Sent::Photo(Photo::Bytes { data, file_name })] => {
            assert_eq!(file_name, "distance_map.png");
            assert!(data.starts_with(PNG_SIGNATURE));
        }
        other => panic!("unexpected sends: {:?}", other),
    }

    let text = reply_text(f.handler.handle(&message(1, "/distance Paris")).await.unwrap());
    assert!(text.contains("two city names"));

    let text = reply_text(f.handler.handle(&message(1, "/distance Paris Atlantis")).await.unwrap());
    assert!(text.starts_with("Atlantis was not found"));
}

/// **Test: points accumulate per user and clear empties them.**
///
/// **Setup:** Fresh sessions.
/// **Action:** user 1 sets color and adds two points; user 2 adds one; user 1 clears.
/// **Expected:** each point command sends an in-memory PNG; clear confirms.
#[tokio::test]
async fn test_color_point_clear_session() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(1, "/renk blue")).await.unwrap());
    assert_eq!(text, "Marker color set to blue!");

    for content in ["/nokta 41.01 28.97", "/point 35.68 139.69"] {
        let response = f.handler.handle(&message(1, content)).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
    }
    f.handler.handle(&message(2, "/point 0 0")).await.unwrap();

    let sent = f.bot.take();
    assert_eq!(sent.len(), 4);
    assert!(sent[1..]
        .iter()
        .all(|s| matches!(s, Sent::Photo(Photo::Bytes { file_name, .. }) if file_name == "map.png")));

    let text = reply_text(f.handler.handle(&message(1, "/temizle")).await.unwrap());
    assert_eq!(text, "All points cleared!");
}

/// **Test: invalid color and coordinates are rejected with a message.**
#[tokio::test]
async fn test_invalid_color_and_point() {
    let f = fixture().await;

    let text = reply_text(f.handler.handle(&message(1, "/color reddish")).await.unwrap());
    assert!(text.starts_with("Unknown color: reddish"));

    let text = reply_text(f.handler.handle(&message(1, "/point 100 0")).await.unwrap());
    assert!(text.contains("not a valid coordinate"));
}

/// **Test: commands for another bot are ignored.**
#[tokio::test]
async fn test_command_for_other_bot_ignored() {
    let f = fixture().await;

    let response = f.handler.handle(&message(1, "/start@other_bot")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
}

/// **Test: database failures become a generic apology, not an error.**
///
/// **Setup:** Handler over a directory whose every query fails.
/// **Action:** /remember_city, /show_city, /show_my_cities.
/// **Expected:** each replies with the "something went wrong" text; no photo, no file.
#[tokio::test]
async fn test_backend_failure_replies_with_apology() {
    let directory: Arc<dyn CityDirectory> = Arc::new(BrokenDirectory);
    let bot = Arc::new(RecordingBot::default());
    let dir = tempfile::tempdir().unwrap();
    let maps = CityMapRenderer::new(directory.clone(), MapRenderer::default());
    let handler = MapCommandHandler::new(bot.clone(), directory, maps, Arc::new(SessionStore::default()), dir.path());

    for content in ["/remember_city Paris", "/show_city Paris", "/show_my_cities"] {
        let text = reply_text(handler.handle(&message(3, content)).await.unwrap());
        assert!(text.starts_with("Sorry, something went wrong"), "{}: {}", content, text);
    }

    assert!(bot.take().iter().all(|s| matches!(s, Sent::Text(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// **Test: the session marker color is what gets drawn.**
///
/// **Setup:** Directory with Paris; fresh sessions (default red).
/// **Action:** user 1 runs /color blue then /point 10 20 and /show_my_cities after saving Paris;
/// user 2 runs /point 10 20 without choosing a color.
/// **Expected:** user 1's markers are blue on both maps; user 2's marker is red.
#[tokio::test]
async fn test_session_color_reaches_rendered_markers() {
    let f = fixture().await;

    f.handler.handle(&message(1, "/color blue")).await.unwrap();
    f.handler.handle(&message(1, "/point 10 20")).await.unwrap();
    f.handler.handle(&message(1, "/remember_city Paris")).await.unwrap();
    f.handler.handle(&message(1, "/show_my_cities")).await.unwrap();
    f.handler.handle(&message(2, "/point 10 20")).await.unwrap();

    let photos: Vec<Vec<u8>> = f
        .bot
        .take()
        .iter()
        .filter(|s| matches!(s, Sent::Photo(_)))
        .map(photo_bytes)
        .collect();
    assert_eq!(photos.len(), 3);
    assert_eq!(marker_rgb(&photos[0], 10.0, 20.0), (0, 0, 255));
    assert_eq!(marker_rgb(&photos[1], 48.8566, 2.3522), (0, 0, 255));
    assert_eq!(marker_rgb(&photos[2], 10.0, 20.0), (255, 0, 0));
}
