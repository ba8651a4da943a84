//! Chat command parsing and the user-facing error taxonomy.
//!
//! Commands start with `/` or `!`; a `@botname` suffix on the command word is accepted
//! when it names this bot. Arguments are the rest of the line.

use map_renderer::MarkerColor;
use storage::Coordinates;
use thiserror::Error;

/// A recognized command with validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Help,
    /// Save a city for the sender. Name is the rest of the line.
    RememberCity(String),
    /// Render one city. Name is the rest of the line.
    ShowCity(String),
    ShowMyCities,
    /// Line between exactly two single-word city names.
    Distance(String, String),
    /// Set the sender's marker color.
    Color(MarkerColor),
    /// Add an ad-hoc point to the sender's map.
    Point { lat: f64, lon: f64 },
    /// Drop the sender's ad-hoc points.
    Clear,
}

/// Recoverable command failures; each becomes a reply via [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("missing argument for /{command}")]
    EmptyInput { command: &'static str },

    #[error("/{command} expects {expected} argument(s), got {got}")]
    MalformedArgumentCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("city not found: {0}")]
    NotFound(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl CommandError {
    /// Text relayed to the user.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::EmptyInput { command } | CommandError::MalformedArgumentCount { command, .. } => {
                match *command {
                    "remember_city" => "Please enter a city name. Example: /remember_city Paris".to_string(),
                    "show_city" => "Please enter a city name. Example: /show_city Paris".to_string(),
                    "distance" => "Please enter two city names. Example: /distance Paris London".to_string(),
                    "color" => "Please enter one color. Example: /color blue".to_string(),
                    "point" => "Please enter a latitude and a longitude. Example: /point 41.01 28.97".to_string(),
                    other => format!("Wrong arguments for /{}. Type /help to see the commands.", other),
                }
            }
            CommandError::NotFound(city) => format!(
                "{} was not found in the database. Check the spelling and write the city name in English.",
                city
            ),
            CommandError::InvalidCoordinate(value) => format!(
                "{} is not a valid coordinate. Latitude must be within -90..90 and longitude within -180..180.",
                value
            ),
            CommandError::InvalidColor(value) => format!(
                "Unknown color: {}. Available colors: {}. A hex value like #ff8800 also works.",
                value,
                MarkerColor::known_names().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

pub const HELP_TEXT: &str = "Available commands:\n\
/start - Greets you.\n\
/remember_city <city> - Saves a city to your list.\n\
/show_city <city> - Shows the city on a map.\n\
/show_my_cities - Shows all your saved cities on a map.\n\
/distance <city1> <city2> - Draws a blue line between two cities.\n\
/color <color> - Sets your marker color.\n\
/point <lat> <lon> - Adds a point to your map and shows it.\n\
/clear - Removes all your points.";

/// Parses `text` as a command.
///
/// Returns `None` when the text is not a command for this bot (no prefix, unknown name,
/// or addressed to another bot); `Some(Err(_))` when the command is known but its
/// arguments are unusable.
pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Result<Command, CommandError>> {
    let text = text.trim();
    let body = text.strip_prefix('/').or_else(|| text.strip_prefix('!'))?;

    let (word, args) = match body.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (body, ""),
    };

    let name = match word.split_once('@') {
        Some((name, target)) => {
            if let Some(me) = bot_username {
                if !target.eq_ignore_ascii_case(me) {
                    return None;
                }
            }
            name
        }
        None => word,
    };

    let parsed = match name.to_ascii_lowercase().as_str() {
        "start" => Ok(Command::Start),
        "help" | "help_me" => Ok(Command::Help),
        "remember_city" => city_name("remember_city", args).map(Command::RememberCity),
        "show_city" => city_name("show_city", args).map(Command::ShowCity),
        "show_my_cities" => Ok(Command::ShowMyCities),
        "distance" => two_cities(args),
        "color" | "renk" => color(args),
        "point" | "nokta" => point(args),
        "clear" | "temizle" => Ok(Command::Clear),
        _ => return None,
    };
    Some(parsed)
}

fn city_name(command: &'static str, args: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::EmptyInput { command });
    }
    Ok(args.to_string())
}

fn two_cities(args: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [first, second] => Ok(Command::Distance(first.to_string(), second.to_string())),
        _ => Err(CommandError::MalformedArgumentCount {
            command: "distance",
            expected: 2,
            got: parts.len(),
        }),
    }
}

fn color(args: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(CommandError::EmptyInput { command: "color" }),
        [value] => value
            .parse::<MarkerColor>()
            .map(Command::Color)
            .map_err(|_| CommandError::InvalidColor(value.to_string())),
        _ => Err(CommandError::MalformedArgumentCount {
            command: "color",
            expected: 1,
            got: parts.len(),
        }),
    }
}

fn point(args: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [lat, lon] = parts.as_slice() else {
        return Err(CommandError::MalformedArgumentCount {
            command: "point",
            expected: 2,
            got: parts.len(),
        });
    };

    let number = |s: &str| {
        s.replace(',', ".")
            .parse::<f64>()
            .map_err(|_| CommandError::InvalidCoordinate(s.to_string()))
    };
    let (lat_value, lon_value) = (number(*lat)?, number(*lon)?);
    if !Coordinates::new(lat_value, lon_value).is_valid() {
        return Err(CommandError::InvalidCoordinate(format!("{} {}", lat, lon)));
    }
    Ok(Command::Point {
        lat: lat_value,
        lon: lon_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(text: &str) -> Command {
        parse(text, Some("city_map_bot")).unwrap().unwrap()
    }

    fn err(text: &str) -> CommandError {
        parse(text, Some("city_map_bot")).unwrap().unwrap_err()
    }

    #[test]
    fn test_not_a_command() {
        assert!(parse("hello there", None).is_none());
        assert!(parse("/unknown", None).is_none());
        assert!(parse("", None).is_none());
    }

    #[test]
    fn test_prefixes_and_aliases() {
        assert_eq!(ok("/start"), Command::Start);
        assert_eq!(ok("!help_me"), Command::Help);
        assert_eq!(ok("/HELP"), Command::Help);
        assert_eq!(ok("!temizle"), Command::Clear);
        assert_eq!(ok("/show_my_cities"), Command::ShowMyCities);
    }

    #[test]
    fn test_bot_mention_suffix() {
        assert_eq!(ok("/start@city_map_bot"), Command::Start);
        assert_eq!(ok("/start@City_Map_Bot"), Command::Start);
        assert!(parse("/start@other_bot", Some("city_map_bot")).is_none());
        assert_eq!(parse("/start@anyone", None), Some(Ok(Command::Start)));
    }

    #[test]
    fn test_city_name_keeps_rest_of_line() {
        assert_eq!(ok("/show_city New York"), Command::ShowCity("New York".to_string()));
        assert_eq!(
            ok("/remember_city   Rio de Janeiro  "),
            Command::RememberCity("Rio de Janeiro".to_string())
        );
        assert_eq!(err("/show_city"), CommandError::EmptyInput { command: "show_city" });
        assert_eq!(err("/remember_city   "), CommandError::EmptyInput { command: "remember_city" });
    }

    #[test]
    fn test_distance_needs_exactly_two_tokens() {
        assert_eq!(
            ok("/distance Paris London"),
            Command::Distance("Paris".to_string(), "London".to_string())
        );
        for input in ["/distance", "/distance Paris", "/distance New York London"] {
            assert!(matches!(
                err(input),
                CommandError::MalformedArgumentCount { command: "distance", expected: 2, .. }
            ));
        }
    }

    #[test]
    fn test_color() {
        assert_eq!(ok("/renk blue"), Command::Color("blue".parse().unwrap()));
        assert_eq!(err("/color"), CommandError::EmptyInput { command: "color" });
        assert_eq!(err("/color reddish"), CommandError::InvalidColor("reddish".to_string()));
        assert!(matches!(err("/color red blue"), CommandError::MalformedArgumentCount { .. }));
    }

    #[test]
    fn test_point() {
        assert_eq!(ok("/nokta 41.01 28.97"), Command::Point { lat: 41.01, lon: 28.97 });
        assert_eq!(ok("/point -33,87 151,21"), Command::Point { lat: -33.87, lon: 151.21 });
        assert_eq!(err("/point abc 10"), CommandError::InvalidCoordinate("abc".to_string()));
        assert!(matches!(err("/point 95 10"), CommandError::InvalidCoordinate(_)));
        assert!(matches!(err("/point 10"), CommandError::MalformedArgumentCount { got: 1, .. }));
    }

    #[test]
    fn test_user_messages_mention_usage() {
        assert!(CommandError::EmptyInput { command: "show_city" }
            .user_message()
            .contains("/show_city Paris"));
        assert!(CommandError::NotFound("Atlantis".to_string())
            .user_message()
            .starts_with("Atlantis was not found"));
    }

    #[test]
    fn test_invalid_color_lists_known_names() {
        let text = CommandError::InvalidColor("reddish".to_string()).user_message();
        assert!(text.starts_with("Unknown color: reddish."));
        for name in MarkerColor::known_names() {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(!text.contains(", r,"));
    }
}
