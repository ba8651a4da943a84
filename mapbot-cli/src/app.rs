//! Wiring: directory, renderer, handler chain and the Telegram runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use map_handlers::{LoggingHandler, MapCommandHandler, SessionStore};
use map_renderer::{Basemap, CityMapRenderer, LabelFont, MapRenderer, MarkerColor};
use mapbot_core::{init_tracing, Bot};
use mapbot_telegram::{fetch_bot_username, run_repl, TelegramBotAdapter};
use storage::{default_seed, CityRepository, CitySeed};
use tracing::{error, info, instrument, warn};

use crate::config::{BotConfig, MapConfig};

/// Opens the city directory, creating tables if needed.
pub async fn open_directory(database_url: &str) -> Result<Arc<CityRepository>> {
    let repo = CityRepository::new(database_url).await.map_err(|e| {
        error!(error = %e, database_url = %database_url, "Failed to open city directory");
        anyhow::anyhow!("Failed to open city directory: {}", e)
    })?;
    Ok(Arc::new(repo))
}

/// Inserts cities from `file`, or the built-in list when `None`. Returns rows added.
pub async fn seed_cities(repo: &CityRepository, file: Option<&Path>) -> Result<usize> {
    let seeds = match file {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Read seed file {}", path.display()))?;
            CitySeed::parse_list(&json).with_context(|| format!("Parse seed file {}", path.display()))?
        }
        None => default_seed().context("Parse built-in city list")?,
    };

    let invalid: Vec<&str> = seeds
        .iter()
        .filter(|s| !storage::Coordinates::new(s.lat, s.lng).is_valid())
        .map(|s| s.city.as_str())
        .collect();
    if !invalid.is_empty() {
        anyhow::bail!("Seed entries with out-of-range coordinates: {}", invalid.join(", "));
    }

    Ok(repo.seed_cities(&seeds).await?)
}

/// Basemap from BASEMAP_DIR (or embedded) and a label font from MAP_FONT_PATH (or system fonts).
pub fn build_renderer(map: &MapConfig) -> Result<MapRenderer> {
    let basemap = match &map.basemap_dir {
        Some(dir) => Basemap::load_dir(dir)
            .with_context(|| format!("Load basemap from {}", dir.display()))?,
        None => Basemap::builtin(),
    };
    let font = LabelFont::discover(map.font_path.as_deref());
    Ok(MapRenderer::new(basemap, font))
}

/// Logging first, then map commands.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    directory: Arc<CityRepository>,
    renderer: MapRenderer,
    map: &MapConfig,
    bot_username: Option<String>,
) -> Result<HandlerChain> {
    let sessions = Arc::new(SessionStore::new(map.marker_color()?));
    let maps = CityMapRenderer::new(directory.clone(), renderer);
    let mut handler = MapCommandHandler::new(bot, directory, maps, sessions, map.output_dir.clone());
    if let Some(username) = bot_username {
        handler = handler.with_bot_username(username);
    }

    Ok(HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(handler)))
}

/// Renders `cities` to `output`: labeled markers, or the distance line when `distance` is set.
/// Returns how many cities were drawn.
#[instrument(skip(directory, renderer, cities, color))]
pub async fn render_cities(
    directory: Arc<CityRepository>,
    renderer: MapRenderer,
    cities: &[String],
    output: &Path,
    color: &MarkerColor,
    distance: bool,
) -> Result<usize> {
    let maps = CityMapRenderer::new(directory, renderer);
    if distance {
        let [city1, city2] = cities else {
            anyhow::bail!("--distance needs exactly two cities, got {}", cities.len());
        };
        maps.render_distance(output, city1, city2).await?;
        return Ok(2);
    }

    let plotted = maps.render_named_cities(output, cities, color).await?;
    if plotted < cities.len() {
        warn!(requested = cities.len(), plotted, "Some cities were not found and were skipped");
    }
    Ok(plotted)
}

fn teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Validates config, initializes logging, builds everything and runs the REPL until shutdown.
/// An empty directory is filled with the built-in city list first.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        output_dir = %config.map().output_dir.display(),
        "Initializing bot"
    );

    let directory = open_directory(config.database_url()).await?;
    if directory.count_cities().await? == 0 {
        let added = seed_cities(&directory, None).await?;
        info!(added, "City directory was empty, seeded built-in cities");
    }

    tokio::fs::create_dir_all(&config.map().output_dir)
        .await
        .with_context(|| format!("Create output dir {}", config.map().output_dir.display()))?;
    let renderer = build_renderer(config.map())?;
    if !renderer.has_labels() {
        warn!("Maps will be drawn without city labels; set MAP_FONT_PATH to a TTF font");
    }

    let bot = teloxide_bot(&config);
    let bot_username = fetch_bot_username(&bot).await;
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = build_handler_chain(adapter, directory, renderer, config.map(), bot_username)?;

    info!("Bot started successfully");
    run_repl(bot, chain).await
}

/// Default output path for `render` when the caller gives a bare file name: inside MAP_OUTPUT_DIR.
pub fn resolve_output(map: &MapConfig, output: &Path) -> PathBuf {
    if output.is_absolute() || output.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
        output.to_path_buf()
    } else {
        map.output_dir.join(output)
    }
}
