//! Map rendering: a static world basemap in Plate Carrée projection with city
//! markers, labels and distance lines, encoded as PNG.
//!
//! ## Modules
//!
//! - [`basemap`] – Basemap layers (GeoJSON files or the embedded outline)
//! - [`color`] – Marker colors
//! - [`projection`] – Equirectangular projection
//! - [`render`] – MapRenderer, RenderRequest, RenderMode
//! - [`city_maps`] – CityMapRenderer (name resolution, file output)

pub mod basemap;
mod canvas;
pub mod city_maps;
pub mod color;
mod error;
pub mod projection;
pub mod render;
mod style;
mod text;

pub use basemap::{Basemap, Layer, LayerKind, Shape};
pub use city_maps::CityMapRenderer;
pub use color::{MarkerColor, Rgba};
pub use error::{RenderError, Result};
pub use projection::PlateCarree;
pub use render::{MapPoint, MapRenderer, RenderMode, RenderRequest};
pub use style::{FIGURE_HEIGHT, FIGURE_WIDTH};
pub use text::LabelFont;
