//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapbot")]
#[command(about = "City map bot: run the Telegram bot, manage the city directory, render maps", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Create the cities and users_cities tables if missing.
    InitDb,
    /// Insert cities from a JSON file (`[{"city", "lat", "lng"}]`) or the built-in list.
    Seed {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Render a map of cities from the directory to a PNG file.
    Render {
        /// City name; repeat for several cities.
        #[arg(short, long = "city", required = true)]
        cities: Vec<String>,
        #[arg(short, long, default_value = "map.png")]
        output: PathBuf,
        /// Marker color (name or #rrggbb); DEFAULT_MARKER_COLOR when omitted.
        #[arg(long)]
        color: Option<String>,
        /// Draw the line between exactly two cities instead of markers.
        #[arg(long)]
        distance: bool,
    },
}
