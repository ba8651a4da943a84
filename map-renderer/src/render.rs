//! Shared map drawing routine.
//!
//! Every image goes through [`MapRenderer::draw_map`]: basemap layers first
//! (land, ocean, lakes, rivers, mountains, coastline, borders), then the
//! request's markers, line and labels.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::basemap::Basemap;
use crate::canvas::Canvas;
use crate::color::MarkerColor;
use crate::error::{RenderError, Result};
use crate::projection::PlateCarree;
use crate::style::{self, layer_style};
use crate::text::LabelFont;

/// A position to plot, with an optional label drawn next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub label: Option<String>,
}

impl MapPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            label: None,
        }
    }

    pub fn labeled(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Markers in the request color; labels only where a point carries one.
    Points,
    /// Markers with a label each; unlabeled points show their coordinates.
    LabeledPoints,
    /// Exactly two points joined by a blue line, both labeled.
    DistanceLine,
}

#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub points: Vec<MapPoint>,
    pub marker_color: MarkerColor,
    pub mode: RenderMode,
}

impl RenderRequest {
    pub fn new(mode: RenderMode, points: Vec<MapPoint>, marker_color: MarkerColor) -> Self {
        Self {
            points,
            marker_color,
            mode,
        }
    }
}

/// Draws map images. Cheap to clone; the basemap and font are shared.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    basemap: Arc<Basemap>,
    font: Option<LabelFont>,
}

impl MapRenderer {
    pub fn new(basemap: Basemap, font: Option<LabelFont>) -> Self {
        Self {
            basemap: Arc::new(basemap),
            font,
        }
    }

    /// Embedded basemap and whichever system font can be found.
    pub fn builtin() -> Self {
        Self::new(Basemap::builtin(), LabelFont::discover(None))
    }

    /// Where the globe sits inside every rendered image.
    pub fn frame() -> PlateCarree {
        let (left, top, width, height) = style::FRAME_BOX;
        PlateCarree::fit(left, top, width, height)
    }

    pub fn has_labels(&self) -> bool {
        self.font.is_some()
    }

    /// Rasterizes `request` into a canvas. CPU-bound; call from a blocking context.
    #[instrument(skip(self, request), fields(mode = ?request.mode, points = request.points.len()))]
    pub(crate) fn draw_map(&self, request: &RenderRequest) -> Result<Canvas> {
        if request.mode == RenderMode::DistanceLine && request.points.len() != 2 {
            return Err(RenderError::InvalidRequest(format!(
                "distance line needs 2 points, got {}",
                request.points.len()
            )));
        }

        let mut canvas = Canvas::new(
            style::FIGURE_WIDTH,
            style::FIGURE_HEIGHT,
            Self::frame(),
            style::FIGURE_BACKGROUND,
        )?;

        canvas.fill_frame(style::OCEAN)?;
        for layer in self.basemap.layers() {
            let layer_style = layer_style(layer.kind);
            for shape in &layer.shapes {
                canvas.draw_shape(shape, &layer_style);
            }
        }
        canvas.outline_frame(style::FRAME_BORDER)?;

        match request.mode {
            RenderMode::Points | RenderMode::LabeledPoints => {
                let color = request.marker_color.rgba();
                for point in &request.points {
                    canvas.marker(point.lon, point.lat, style::MARKER_RADIUS, color);
                }
            }
            RenderMode::DistanceLine => {
                let (a, b) = (&request.points[0], &request.points[1]);
                canvas.segment(
                    (a.lon, a.lat),
                    (b.lon, b.lat),
                    style::DISTANCE_LINE,
                    style::DISTANCE_LINE_WIDTH,
                );
                for point in [a, b] {
                    canvas.marker(point.lon, point.lat, style::ENDPOINT_RADIUS, style::DISTANCE_LINE);
                }
            }
        }

        self.draw_labels(&mut canvas, request);
        debug!("Map drawn");
        Ok(canvas)
    }

    /// Draws `request` and encodes it as PNG.
    pub fn render_png(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        self.draw_map(request)?.encode_png()
    }

    /// Plots raw points (basemap only when empty) in `marker_color`.
    pub fn render_points(&self, points: &[MapPoint], marker_color: &MarkerColor) -> Result<Vec<u8>> {
        let request = RenderRequest::new(RenderMode::Points, points.to_vec(), marker_color.clone());
        self.render_png(&request)
    }

    fn draw_labels(&self, canvas: &mut Canvas, request: &RenderRequest) {
        let Some(font) = &self.font else {
            return;
        };
        for point in &request.points {
            let text = match (&point.label, request.mode) {
                (Some(label), _) => label.clone(),
                (None, RenderMode::Points) => continue,
                (None, _) => format!("{:.2}, {:.2}", point.lat, point.lon),
            };
            let width = font.measure(&text, style::LABEL_SIZE);
            let (x, y) = label_anchor(canvas.frame(), point, width);
            font.draw(canvas, &text, x, y, style::LABEL_SIZE, style::LABEL_COLOR);
        }
    }
}

/// Baseline start for a label `width` pixels wide: up and right of the marker, or up and left
/// when it would leave the frame on the right.
fn label_anchor(frame: &PlateCarree, point: &MapPoint, width: f32) -> (f32, f32) {
    let (x, y) = frame.project(point.lon, point.lat);
    let offset = style::LABEL_OFFSET_DEG as f32 * frame.scale();
    if x + offset + width > frame.left + frame.width {
        (x - offset - width, y - offset)
    } else {
        (x + offset, y - offset)
    }
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self::new(Basemap::builtin(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    /// RGB of the decoded image at the pixel holding (`lat`, `lon`).
    fn pixel_at(png: &[u8], lat: f64, lon: f64) -> (u8, u8, u8) {
        let pixmap = tiny_skia::Pixmap::decode_png(png).unwrap();
        let (x, y) = MapRenderer::frame().project(lon, lat);
        let pixel = pixmap.pixel(x as u32, y as u32).unwrap().demultiply();
        (pixel.red(), pixel.green(), pixel.blue())
    }

    #[test]
    fn test_render_points_empty_is_basemap_png() {
        let renderer = MapRenderer::default();
        let png = renderer.render_points(&[], &MarkerColor::default()).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_points_change_the_image() {
        let renderer = MapRenderer::default();
        let empty = renderer.render_points(&[], &MarkerColor::default()).unwrap();
        let marked = renderer
            .render_points(&[MapPoint::new(48.8566, 2.3522)], &MarkerColor::default())
            .unwrap();
        assert_ne!(empty, marked);
    }

    #[test]
    fn test_marker_color_reaches_pixels() {
        let renderer = MapRenderer::default();
        let point = [MapPoint::new(10.0, 20.0)];

        let red = renderer.render_points(&point, &MarkerColor::default()).unwrap();
        let blue = renderer.render_points(&point, &"blue".parse().unwrap()).unwrap();
        let hex = renderer.render_points(&point, &"#ff8800".parse().unwrap()).unwrap();

        assert_eq!(pixel_at(&red, 10.0, 20.0), (255, 0, 0));
        assert_eq!(pixel_at(&blue, 10.0, 20.0), (0, 0, 255));
        let (r, g, b) = pixel_at(&hex, 10.0, 20.0);
        assert_eq!((r, b), (255, 0));
        assert!((135..=137).contains(&g));
        assert_ne!(pixel_at(&blue, -40.0, -120.0), (0, 0, 255));
    }

    #[test]
    fn test_distance_endpoints_are_blue() {
        let renderer = MapRenderer::default();
        let request = RenderRequest::new(
            RenderMode::DistanceLine,
            vec![
                MapPoint::labeled(48.8566, 2.3522, "Paris"),
                MapPoint::labeled(40.7128, -74.006, "New York"),
            ],
            "green".parse().unwrap(),
        );
        let png = renderer.render_png(&request).unwrap();

        assert_eq!(pixel_at(&png, 48.8566, 2.3522), (0, 0, 255));
        assert_eq!(pixel_at(&png, 40.7128, -74.006), (0, 0, 255));
    }

    #[test]
    fn test_label_anchor_flips_at_right_edge() {
        let frame = PlateCarree::fit(0.0, 0.0, 360.0, 180.0);

        let (x, y) = label_anchor(&frame, &MapPoint::new(0.0, 0.0), 40.0);
        assert!((x - 180.3).abs() < 1e-3);
        assert!((y - 89.7).abs() < 1e-3);

        let (x, _) = label_anchor(&frame, &MapPoint::new(0.0, 170.0), 40.0);
        assert!((x - (350.0 - 0.3 - 40.0)).abs() < 1e-3);
    }

    #[test]
    fn test_frame_fits_figure() {
        let frame = MapRenderer::frame();
        assert!(frame.left >= 0.0 && frame.top >= 0.0);
        assert!(frame.left + frame.width <= style::FIGURE_WIDTH as f32);
        assert!(frame.top + frame.height <= style::FIGURE_HEIGHT as f32);
    }

    #[test]
    fn test_distance_requires_two_points() {
        let renderer = MapRenderer::default();
        let request = RenderRequest::new(
            RenderMode::DistanceLine,
            vec![MapPoint::labeled(48.8566, 2.3522, "Paris")],
            MarkerColor::default(),
        );
        assert!(matches!(
            renderer.render_png(&request),
            Err(RenderError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_out_of_range_point_still_renders() {
        let renderer = MapRenderer::default();
        let png = renderer
            .render_points(&[MapPoint::new(120.0, 400.0)], &MarkerColor::default())
            .unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }
}
