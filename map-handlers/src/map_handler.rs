//! Map command handler: runs chat commands against the city directory and the renderer.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use map_renderer::{CityMapRenderer, MapPoint, RenderError};
use mapbot_core::{Bot, Handler, HandlerResponse, MapbotError, Message, Photo, Result};
use storage::{CityDirectory, StorageError};
use tracing::{error, info, instrument, warn};

use crate::commands::{self, Command, CommandError, HELP_TEXT};
use crate::session::SessionStore;

const MSG_SOMETHING_WENT_WRONG: &str = "Sorry, something went wrong while preparing your map. Please try again.";
const MSG_NO_SAVED_CITIES: &str =
    "You have not saved any cities yet. Use /remember_city <city> to add one.";

/// What a command produced for the user.
#[derive(Debug)]
enum Outcome {
    Text(String),
    Photo(Photo),
}

/// Failures while running a command: recoverable command errors or a backend failure.
#[derive(Debug)]
enum Failure {
    Command(CommandError),
    Backend(MapbotError),
}

impl From<CommandError> for Failure {
    fn from(e: CommandError) -> Self {
        Failure::Command(e)
    }
}

impl From<StorageError> for Failure {
    fn from(e: StorageError) -> Self {
        Failure::Backend(MapbotError::Database(e.to_string()))
    }
}

impl From<RenderError> for Failure {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::NotFound(city) => Failure::Command(CommandError::NotFound(city)),
            other => Failure::Backend(MapbotError::Render(other.to_string())),
        }
    }
}

/// Handles the map bot's commands; other messages pass through with Continue.
///
/// Images are sent with [`Bot::send_photo`] and end the chain with Stop; text replies
/// end it with Reply carrying the text.
#[derive(Clone)]
pub struct MapCommandHandler {
    bot: Arc<dyn Bot>,
    directory: Arc<dyn CityDirectory>,
    maps: CityMapRenderer,
    sessions: Arc<SessionStore>,
    output_dir: PathBuf,
    bot_username: Option<String>,
}

impl MapCommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        directory: Arc<dyn CityDirectory>,
        maps: CityMapRenderer,
        sessions: Arc<SessionStore>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bot,
            directory,
            maps,
            sessions,
            output_dir: output_dir.into(),
            bot_username: None,
        }
    }

    /// Commands addressed as `/cmd@other_bot` are ignored once the username is set.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    async fn execute(&self, message: &Message, command: Command) -> std::result::Result<Outcome, Failure> {
        let user_id = message.user.id;
        match command {
            Command::Start => Ok(Outcome::Text(format!(
                "Hello, {}. Type /help to see the available commands.",
                message.user.display_name()
            ))),
            Command::Help => Ok(Outcome::Text(HELP_TEXT.to_string())),
            Command::RememberCity(city) => {
                if self.directory.add_city(user_id, &city).await? {
                    info!(user_id, city = %city, "City saved");
                    Ok(Outcome::Text(format!("{} was saved successfully!", city)))
                } else {
                    Err(CommandError::NotFound(city).into())
                }
            }
            Command::ShowCity(city) => {
                if self.directory.get_coordinates(&city).await?.is_none() {
                    return Err(CommandError::NotFound(city).into());
                }
                let path = self.output_dir.join(format!("{}_map.png", file_stem(&city)));
                let color = self.sessions.marker_color(user_id).await;
                self.maps
                    .render_named_cities(&path, std::slice::from_ref(&city), &color)
                    .await?;
                Ok(Outcome::Photo(Photo::File(path)))
            }
            Command::ShowMyCities => {
                let cities = self.directory.select_cities(user_id).await?;
                if cities.is_empty() {
                    return Ok(Outcome::Text(MSG_NO_SAVED_CITIES.to_string()));
                }
                let path = self.output_dir.join(format!("{}_cities_map.png", user_id));
                let color = self.sessions.marker_color(user_id).await;
                self.maps.render_named_cities(&path, &cities, &color).await?;
                Ok(Outcome::Photo(Photo::File(path)))
            }
            Command::Distance(city1, city2) => {
                let path = self.output_dir.join("distance_map.png");
                let png = self.maps.render_distance(&path, &city1, &city2).await?;
                Ok(Outcome::Photo(Photo::png(png, "distance_map.png")))
            }
            Command::Color(color) => {
                let reply = format!("Marker color set to {}!", color);
                self.sessions.set_color(user_id, color).await;
                Ok(Outcome::Text(reply))
            }
            Command::Point { lat, lon } => {
                let session = self.sessions.push_point(user_id, MapPoint::new(lat, lon)).await;
                info!(user_id, lat, lon, points = session.points.len(), "Point added");
                let png = self
                    .maps
                    .render_points(session.points, session.marker_color)
                    .await?;
                Ok(Outcome::Photo(Photo::png(png, "map.png")))
            }
            Command::Clear => {
                let cleared = self.sessions.clear_points(user_id).await;
                info!(user_id, cleared, "Points cleared");
                Ok(Outcome::Text("All points cleared!".to_string()))
            }
        }
    }
}

#[async_trait]
impl Handler for MapCommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(parsed) = commands::parse(&message.content, self.bot_username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        let outcome = match parsed {
            Ok(command) => {
                info!(command = ?command, "Running command");
                self.execute(message, command).await
            }
            Err(e) => Err(Failure::Command(e)),
        };

        match outcome {
            Ok(Outcome::Photo(photo)) => {
                self.bot.send_photo(&message.chat, photo, None).await?;
                Ok(HandlerResponse::Stop)
            }
            Ok(Outcome::Text(text)) => {
                self.bot.send_message(&message.chat, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
            Err(Failure::Command(e)) => {
                warn!(error = %e, "Command rejected");
                let text = e.user_message();
                self.bot.send_message(&message.chat, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
            Err(Failure::Backend(e)) => {
                error!(error = %e, "Command failed");
                self.bot
                    .send_message(&message.chat, MSG_SOMETHING_WENT_WRONG)
                    .await?;
                Ok(HandlerResponse::Reply(MSG_SOMETHING_WENT_WRONG.to_string()))
            }
        }
    }
}

/// City name as a file name component: path separators and control characters become `_`.
fn file_stem(city: &str) -> String {
    city.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}
