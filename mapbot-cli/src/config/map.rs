//! Map settings: where images go, basemap and font sources, default marker color.

use anyhow::Result;
use map_renderer::MarkerColor;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MapConfig {
    /// MAP_OUTPUT_DIR, default `./maps`
    pub output_dir: PathBuf,
    /// BASEMAP_DIR: directory of `<layer>.geojson` files; embedded outline when unset
    pub basemap_dir: Option<PathBuf>,
    /// MAP_FONT_PATH: TTF for labels; system fonts are tried when unset
    pub font_path: Option<PathBuf>,
    /// DEFAULT_MARKER_COLOR, default `red`
    pub default_marker_color: String,
}

impl MapConfig {
    pub fn from_env() -> Self {
        Self {
            output_dir: env::var("MAP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./maps")),
            basemap_dir: env::var("BASEMAP_DIR").ok().map(PathBuf::from),
            font_path: env::var("MAP_FONT_PATH").ok().map(PathBuf::from),
            default_marker_color: env::var("DEFAULT_MARKER_COLOR")
                .unwrap_or_else(|_| "red".to_string()),
        }
    }

    /// Parsed default marker color.
    pub fn marker_color(&self) -> Result<MarkerColor> {
        self.default_marker_color
            .parse::<MarkerColor>()
            .map_err(|e| anyhow::anyhow!("DEFAULT_MARKER_COLOR: {}", e))
    }

    pub fn validate(&self) -> Result<()> {
        self.marker_color()?;
        if let Some(dir) = &self.basemap_dir {
            if !dir.is_dir() {
                anyhow::bail!("BASEMAP_DIR is not a directory: {}", dir.display());
            }
        }
        Ok(())
    }
}
