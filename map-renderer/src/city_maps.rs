//! City-name rendering on top of [`MapRenderer`].
//!
//! Names are resolved through a [`CityDirectory`]; rasterization runs on the
//! blocking pool so a render never stalls the async runtime.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::CityDirectory;
use tracing::{debug, info, instrument};

use crate::color::MarkerColor;
use crate::error::{RenderError, Result};
use crate::render::{MapPoint, MapRenderer, RenderMode, RenderRequest};

#[derive(Clone)]
pub struct CityMapRenderer {
    directory: Arc<dyn CityDirectory>,
    renderer: MapRenderer,
}

impl CityMapRenderer {
    pub fn new(directory: Arc<dyn CityDirectory>, renderer: MapRenderer) -> Self {
        Self {
            directory,
            renderer,
        }
    }

    /// Raw points as PNG bytes; an empty slice gives the bare basemap.
    pub async fn render_points(&self, points: Vec<MapPoint>, marker_color: MarkerColor) -> Result<Vec<u8>> {
        let request = RenderRequest::new(RenderMode::Points, points, marker_color);
        self.render_blocking(request).await
    }

    /// Plots every name that resolves, labeled, and writes the PNG to `path`.
    /// Unresolved names are skipped. Returns how many cities were plotted.
    #[instrument(skip(self, path, city_names, marker_color), fields(path = %path.display(), names = city_names.len()))]
    pub async fn render_named_cities(
        &self,
        path: &Path,
        city_names: &[String],
        marker_color: &MarkerColor,
    ) -> Result<usize> {
        let mut points = Vec::with_capacity(city_names.len());
        for name in city_names {
            match self.directory.get_coordinates(name).await? {
                Some(coords) => points.push(MapPoint::labeled(coords.lat, coords.lng, name.as_str())),
                None => debug!(city = %name, "City not in directory, skipped"),
            }
        }
        let plotted = points.len();

        let request = RenderRequest::new(RenderMode::LabeledPoints, points, marker_color.clone());
        let png = self.render_blocking(request).await?;
        write_png(path, &png).await?;

        info!(plotted, "City map written");
        Ok(plotted)
    }

    /// Draws the line between two cities, writes it to `path` and returns the PNG.
    /// Either name unresolved gives [`RenderError::NotFound`] and nothing is written.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn render_distance(&self, path: &Path, city1: &str, city2: &str) -> Result<Vec<u8>> {
        let from = self
            .directory
            .get_coordinates(city1)
            .await?
            .ok_or_else(|| RenderError::NotFound(city1.to_string()))?;
        let to = self
            .directory
            .get_coordinates(city2)
            .await?
            .ok_or_else(|| RenderError::NotFound(city2.to_string()))?;

        let request = RenderRequest::new(
            RenderMode::DistanceLine,
            vec![
                MapPoint::labeled(from.lat, from.lng, city1),
                MapPoint::labeled(to.lat, to.lng, city2),
            ],
            MarkerColor::default(),
        );
        let png = self.render_blocking(request).await?;
        write_png(path, &png).await?;

        info!("Distance map written");
        Ok(png)
    }

    async fn render_blocking(&self, request: RenderRequest) -> Result<Vec<u8>> {
        let renderer = self.renderer.clone();
        tokio::task::spawn_blocking(move || renderer.render_png(&request))
            .await
            .map_err(|e| RenderError::Worker(e.to_string()))?
    }
}

/// Replaces `path` in one rename: a reader opening it sees the previous image or the new one,
/// never a truncated file. Output paths are shared between users (`Paris_map.png`).
async fn write_png(path: &Path, png: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            tokio::fs::create_dir_all(parent).await?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };
    let target = path.to_path_buf();
    let data = png.to_vec();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let mut staged = tempfile::Builder::new()
            .prefix(".map-")
            .suffix(".png.tmp")
            .tempfile_in(&dir)?;
        staged.write_all(&data)?;
        staged.persist(&target).map_err(|e| RenderError::Io(e.error))?;
        Ok(())
    })
    .await
    .map_err(|e| RenderError::Worker(e.to_string()))?
}
