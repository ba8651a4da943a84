//! Equirectangular (Plate Carrée) projection onto a pixel frame.

/// Pixel rectangle holding the whole globe: longitude -180..180 maps left to right,
/// latitude 90..-90 maps top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCarree {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlateCarree {
    /// Largest 2:1 frame centered inside the given box.
    pub fn fit(left: f32, top: f32, width: f32, height: f32) -> Self {
        let (w, h) = if width / 2.0 <= height {
            (width, width / 2.0)
        } else {
            (height * 2.0, height)
        };
        Self {
            left: left + (width - w) / 2.0,
            top: top + (height - h) / 2.0,
            width: w,
            height: h,
        }
    }

    /// Longitude/latitude in degrees to pixel coordinates. Values outside the globe land outside the frame.
    pub fn project(&self, lon: f64, lat: f64) -> (f32, f32) {
        let x = self.left as f64 + (lon + 180.0) / 360.0 * self.width as f64;
        let y = self.top as f64 + (90.0 - lat) / 180.0 * self.height as f64;
        (x as f32, y as f32)
    }

    /// Pixels per degree (identical on both axes).
    pub fn scale(&self) -> f32 {
        self.width / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_box_limits_by_height() {
        let frame = PlateCarree::fit(0.0, 0.0, 1000.0, 300.0);
        assert_eq!(frame.width, 600.0);
        assert_eq!(frame.height, 300.0);
        assert_eq!(frame.left, 200.0);
        assert_eq!(frame.top, 0.0);
    }

    #[test]
    fn test_fit_tall_box_limits_by_width() {
        let frame = PlateCarree::fit(125.0, 72.0, 775.0, 462.0);
        assert_eq!(frame.width, 775.0);
        assert_eq!(frame.height, 387.5);
        assert_eq!(frame.top, 72.0 + (462.0 - 387.5) / 2.0);
    }

    #[test]
    fn test_project_corners_and_center() {
        let frame = PlateCarree::fit(0.0, 0.0, 360.0, 180.0);
        assert_eq!(frame.project(-180.0, 90.0), (0.0, 0.0));
        assert_eq!(frame.project(180.0, -90.0), (360.0, 180.0));
        assert_eq!(frame.project(0.0, 0.0), (180.0, 90.0));
        assert_eq!(frame.scale(), 1.0);
    }
}
