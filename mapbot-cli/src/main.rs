//! mapbot CLI: run the Telegram bot, create and seed the city directory, render maps.
//! Config from env (and `.env`) plus optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use map_renderer::MarkerColor;
use mapbot_cli::app::{self, resolve_output};
use mapbot_cli::config::{database_url_from_env, BotConfig, MapConfig};
use mapbot_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            app::run_bot(config).await
        }
        Commands::InitDb => {
            init_console_tracing();
            let database_url = database_url_from_env();
            let repo = app::open_directory(&database_url).await?;
            println!(
                "City directory ready at {} ({} cities).",
                database_url,
                repo.count_cities().await?
            );
            Ok(())
        }
        Commands::Seed { file } => {
            init_console_tracing();
            let database_url = database_url_from_env();
            let repo = app::open_directory(&database_url).await?;
            let added = app::seed_cities(&repo, file.as_deref()).await?;
            println!(
                "Added {} cities; directory now holds {}.",
                added,
                repo.count_cities().await?
            );
            Ok(())
        }
        Commands::Render {
            cities,
            output,
            color,
            distance,
        } => {
            init_console_tracing();
            let map = MapConfig::from_env();
            let color: MarkerColor = match color {
                Some(c) => c.parse::<MarkerColor>().with_context(|| format!("--color {}", c))?,
                None => map.marker_color()?,
            };
            let output = resolve_output(&map, &output);
            let repo = app::open_directory(&database_url_from_env()).await?;
            let renderer = app::build_renderer(&map)?;

            let drawn = app::render_cities(repo, renderer, &cities, &output, &color, distance).await?;
            println!("Wrote {} ({} of {} cities drawn).", output.display(), drawn, cities.len());
            Ok(())
        }
    }
}

/// Console-only logging for one-shot commands; RUST_LOG overrides the `info` default.
fn init_console_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();
}
