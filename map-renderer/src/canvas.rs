//! Raster canvas: a tiny-skia pixmap with a projected map frame.
//!
//! Basemap geometry and markers are clipped to the frame; labels are not.

use tiny_skia::{
    FillRule, Mask, Paint, Path, PathBuilder, Pixmap, PremultipliedColorU8, Rect, StrokeDash,
    Transform,
};

use crate::basemap::{LonLat, Shape};
use crate::color::Rgba;
use crate::error::{RenderError, Result};
use crate::projection::PlateCarree;
use crate::style::{LayerStyle, Stroke};

pub(crate) struct Canvas {
    pixmap: Pixmap,
    frame: PlateCarree,
    clip: Mask,
}

impl Canvas {
    pub fn new(width: u32, height: u32, frame: PlateCarree, background: Rgba) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Canvas(format!("invalid size {}x{}", width, height)))?;
        pixmap.fill(background.to_skia());

        let mut clip = Mask::new(width, height)
            .ok_or_else(|| RenderError::Canvas("cannot allocate clip mask".to_string()))?;
        clip.fill_path(&frame_path(&frame)?, FillRule::Winding, false, Transform::identity());

        Ok(Self {
            pixmap,
            frame,
            clip,
        })
    }

    pub fn frame(&self) -> &PlateCarree {
        &self.frame
    }

    pub fn fill_frame(&mut self, color: Rgba) -> Result<()> {
        let path = frame_path(&self.frame)?;
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    pub fn outline_frame(&mut self, color: Rgba) -> Result<()> {
        let path = frame_path(&self.frame)?;
        let stroke = tiny_skia::Stroke {
            width: 1.0,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Draws one basemap shape. Polygons get the fill and stroke, lines only the stroke.
    pub fn draw_shape(&mut self, shape: &Shape, style: &LayerStyle) {
        match shape {
            Shape::Polygon(rings) => {
                let Some(path) = self.polygon_path(rings) else {
                    return;
                };
                if let Some(fill) = style.fill {
                    self.pixmap.fill_path(
                        &path,
                        &paint(fill),
                        FillRule::EvenOdd,
                        Transform::identity(),
                        Some(&self.clip),
                    );
                }
                if let Some(stroke) = &style.stroke {
                    self.stroke(&path, stroke);
                }
            }
            Shape::Line(points) => {
                if let (Some(stroke), Some(path)) = (&style.stroke, self.line_path(points)) {
                    self.stroke(&path, stroke);
                }
            }
        }
    }

    /// Filled circle centered on a geographic position.
    pub fn marker(&mut self, lon: f64, lat: f64, radius: f32, color: Rgba) {
        let (x, y) = self.frame.project(lon, lat);
        if let Some(path) = PathBuilder::from_circle(x, y, radius) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                Some(&self.clip),
            );
        }
    }

    /// Straight segment between two geographic positions.
    pub fn segment(&mut self, from: LonLat, to: LonLat, color: Rgba, width: f32) {
        if let Some(path) = self.line_path(&[from, to]) {
            self.stroke(
                &path,
                &Stroke {
                    color,
                    width,
                    dashed: false,
                },
            );
        }
    }

    /// Source-over blend of `color` at `coverage` (0.0..=1.0) into one pixel.
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= self.pixmap.width() as i32 || y >= self.pixmap.height() as i32 {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0) * color.a as f32 / 255.0;
        if coverage <= 0.0 {
            return;
        }

        let idx = y as usize * self.pixmap.width() as usize + x as usize;
        let pixels = self.pixmap.pixels_mut();
        let dst = pixels[idx];
        let keep = 1.0 - coverage;
        let channel = |src: u8, dst: u8| (src as f32 * coverage + dst as f32 * keep).round() as u8;

        let a = channel(255, dst.alpha());
        let r = channel(color.r, dst.red()).min(a);
        let g = channel(color.g, dst.green()).min(a);
        let b = channel(color.b, dst.blue()).min(a);
        if let Some(blended) = PremultipliedColorU8::from_rgba(r, g, b, a) {
            pixels[idx] = blended;
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn stroke(&mut self, path: &Path, stroke: &Stroke) {
        let mut skia_stroke = tiny_skia::Stroke {
            width: stroke.width,
            ..Default::default()
        };
        if stroke.dashed {
            skia_stroke.dash = StrokeDash::new(vec![1.0, 2.0], 0.0);
        }
        self.pixmap.stroke_path(
            path,
            &paint(stroke.color),
            &skia_stroke,
            Transform::identity(),
            Some(&self.clip),
        );
    }

    fn polygon_path(&self, rings: &[Vec<LonLat>]) -> Option<Path> {
        let mut pb = PathBuilder::new();
        for ring in rings.iter().filter(|r| r.len() >= 3) {
            let (x, y) = self.frame.project(ring[0].0, ring[0].1);
            pb.move_to(x, y);
            for &(lon, lat) in &ring[1..] {
                let (x, y) = self.frame.project(lon, lat);
                pb.line_to(x, y);
            }
            pb.close();
        }
        pb.finish()
    }

    fn line_path(&self, points: &[LonLat]) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        if rest.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        let (x, y) = self.frame.project(first.0, first.1);
        pb.move_to(x, y);
        for &(lon, lat) in rest {
            let (x, y) = self.frame.project(lon, lat);
            pb.line_to(x, y);
        }
        pb.finish()
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn frame_path(frame: &PlateCarree) -> Result<Path> {
    let rect = Rect::from_xywh(frame.left, frame.top, frame.width, frame.height)
        .ok_or_else(|| RenderError::Canvas("empty map frame".to_string()))?;
    Ok(PathBuilder::from_rect(rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        let frame = PlateCarree::fit(0.0, 0.0, 360.0, 180.0);
        Canvas::new(360, 180, frame, Rgba::rgb(255, 255, 255)).unwrap()
    }

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> PremultipliedColorU8 {
        canvas.pixmap.pixel(x, y).unwrap()
    }

    #[test]
    fn test_marker_paints_projected_position() {
        let mut canvas = canvas();
        canvas.marker(0.0, 0.0, 5.0, Rgba::rgb(255, 0, 0));

        let center = pixel(&canvas, 180, 90);
        assert_eq!((center.red(), center.green(), center.blue()), (255, 0, 0));
        let far = pixel(&canvas, 10, 10);
        assert_eq!((far.red(), far.green(), far.blue()), (255, 255, 255));
    }

    #[test]
    fn test_polygon_hole_left_unfilled() {
        let mut canvas = canvas();
        let outer = vec![(-100.0, -50.0), (100.0, -50.0), (100.0, 50.0), (-100.0, 50.0)];
        let hole = vec![(-10.0, -10.0), (10.0, -10.0), (10.0, 10.0), (-10.0, 10.0)];
        let style = LayerStyle {
            fill: Some(Rgba::rgb(0, 255, 0)),
            stroke: None,
        };

        canvas.draw_shape(&Shape::Polygon(vec![outer, hole]), &style);

        let inside_hole = pixel(&canvas, 180, 90);
        assert_eq!(inside_hole.green(), 255);
        assert_eq!(inside_hole.red(), 255);
        let on_land = pixel(&canvas, 120, 90);
        assert_eq!((on_land.red(), on_land.green()), (0, 255));
    }

    #[test]
    fn test_blend_pixel_ignores_out_of_bounds() {
        let mut canvas = canvas();
        canvas.blend_pixel(-1, 5, Rgba::rgb(0, 0, 0), 1.0);
        canvas.blend_pixel(5, 500, Rgba::rgb(0, 0, 0), 1.0);
        canvas.blend_pixel(5, 5, Rgba::rgb(0, 0, 0), 1.0);

        assert_eq!(pixel(&canvas, 5, 5).red(), 0);
    }

    #[test]
    fn test_encode_png_signature() {
        let png = canvas().encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
