//! Basemap layers: land, ocean, lakes, rivers, mountains, coastline, borders.
//!
//! Layers come from a directory of GeoJSON files (`land.geojson`, `lakes.geojson`, ...)
//! such as Natural Earth exports. Any layer without a file falls back to the embedded
//! coarse world outline; a missing coastline is traced from the land polygons.

mod builtin;
mod geojson_source;

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;

/// Longitude/latitude pair in degrees.
pub type LonLat = (f64, f64);

/// One drawable feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Exterior ring followed by optional hole rings.
    Polygon(Vec<Vec<LonLat>>),
    /// Open polyline.
    Line(Vec<LonLat>),
}

/// Basemap layers in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Land,
    Ocean,
    Lakes,
    Rivers,
    Mountains,
    Coastline,
    Borders,
}

impl LayerKind {
    pub const ALL: [LayerKind; 7] = [
        LayerKind::Land,
        LayerKind::Ocean,
        LayerKind::Lakes,
        LayerKind::Rivers,
        LayerKind::Mountains,
        LayerKind::Coastline,
        LayerKind::Borders,
    ];

    /// File stem looked up in a basemap directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            LayerKind::Land => "land",
            LayerKind::Ocean => "ocean",
            LayerKind::Lakes => "lakes",
            LayerKind::Rivers => "rivers",
            LayerKind::Mountains => "mountains",
            LayerKind::Coastline => "coastline",
            LayerKind::Borders => "borders",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub shapes: Vec<Shape>,
}

/// Static background map, drawn identically under every render.
#[derive(Debug, Clone)]
pub struct Basemap {
    layers: Vec<Layer>,
}

impl Basemap {
    /// Embedded coarse world outline.
    pub fn builtin() -> Self {
        let mut layers: Vec<Layer> = LayerKind::ALL
            .iter()
            .map(|&kind| Layer {
                kind,
                shapes: builtin::shapes(kind),
            })
            .collect();
        derive_coastline(&mut layers);
        Self { layers }
    }

    /// Loads `<layer>.geojson` files from `dir`; layers without a file use the embedded data.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        info!(dir = %dir.display(), "Loading basemap layers");

        let mut layers = Vec::with_capacity(LayerKind::ALL.len());
        let mut coastline_from_file = false;
        for kind in LayerKind::ALL {
            let path = dir.join(format!("{}.geojson", kind.file_stem()));
            let shapes = if path.is_file() {
                let shapes = geojson_source::read_shapes(&path)?;
                info!(layer = %kind, shapes = shapes.len(), "Loaded basemap layer from file");
                if kind == LayerKind::Coastline {
                    coastline_from_file = true;
                }
                shapes
            } else {
                debug!(layer = %kind, "No layer file, using embedded outline");
                builtin::shapes(kind)
            };
            layers.push(Layer { kind, shapes });
        }

        if !coastline_from_file {
            derive_coastline(&mut layers);
        }
        Ok(Self { layers })
    }

    /// Layers in draw order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

impl Default for Basemap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Replaces the coastline layer with the outlines of every land polygon ring.
fn derive_coastline(layers: &mut [Layer]) {
    let outlines: Vec<Shape> = layers
        .iter()
        .filter(|l| l.kind == LayerKind::Land)
        .flat_map(|l| l.shapes.iter())
        .filter_map(|shape| match shape {
            Shape::Polygon(rings) => Some(rings),
            Shape::Line(_) => None,
        })
        .flat_map(|rings| rings.iter())
        .map(|ring| {
            let mut line = ring.clone();
            if let Some(&first) = ring.first() {
                if ring.last() != Some(&first) {
                    line.push(first);
                }
            }
            Shape::Line(line)
        })
        .collect();

    if let Some(coastline) = layers.iter_mut().find(|l| l.kind == LayerKind::Coastline) {
        coastline.shapes = outlines;
    }
}
