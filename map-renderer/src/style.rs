//! Fixed map styling: figure geometry, basemap layer colors, marker and line sizes.

use crate::basemap::LayerKind;
use crate::color::Rgba;

/// 10 x 6 inches at 100 dpi.
pub const FIGURE_WIDTH: u32 = 1000;
pub const FIGURE_HEIGHT: u32 = 600;

/// Box the map frame is fitted into (left, top, width, height).
pub(crate) const FRAME_BOX: (f32, f32, f32, f32) = (125.0, 72.0, 775.0, 462.0);

pub(crate) const FIGURE_BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
pub(crate) const OCEAN: Rgba = Rgba::rgb(173, 216, 230);
pub(crate) const FRAME_BORDER: Rgba = Rgba::rgb(0, 0, 0);

/// 10pt marker diameter at 100 dpi.
pub(crate) const MARKER_RADIUS: f32 = 6.94;
/// Endpoint markers on a distance line.
pub(crate) const ENDPOINT_RADIUS: f32 = 4.17;
pub(crate) const DISTANCE_LINE: Rgba = Rgba::rgb(0, 0, 255);
pub(crate) const DISTANCE_LINE_WIDTH: f32 = 2.78;

/// 9pt at 100 dpi.
pub(crate) const LABEL_SIZE: f32 = 12.5;
pub(crate) const LABEL_COLOR: Rgba = Rgba::rgb(0, 0, 0);
/// Label anchor offset from the marker, in degrees on both axes.
pub(crate) const LABEL_OFFSET_DEG: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayerStyle {
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

pub(crate) fn layer_style(kind: LayerKind) -> LayerStyle {
    let solid = |color, width| {
        Some(Stroke {
            color,
            width,
            dashed: false,
        })
    };
    match kind {
        LayerKind::Land => LayerStyle {
            fill: Some(Rgba::rgb(144, 238, 144)),
            stroke: None,
        },
        LayerKind::Ocean => LayerStyle {
            fill: Some(OCEAN),
            stroke: None,
        },
        LayerKind::Lakes => LayerStyle {
            fill: Some(Rgba::rgb(0, 0, 255).with_opacity(0.5)),
            stroke: None,
        },
        LayerKind::Rivers => LayerStyle {
            fill: None,
            stroke: solid(Rgba::rgb(152, 183, 226), 1.0),
        },
        LayerKind::Mountains => LayerStyle {
            fill: Some(Rgba::rgb(165, 42, 42).with_opacity(0.3)),
            stroke: None,
        },
        LayerKind::Coastline => LayerStyle {
            fill: None,
            stroke: solid(Rgba::rgb(0, 0, 0), 1.0),
        },
        LayerKind::Borders => LayerStyle {
            fill: None,
            stroke: Some(Stroke {
                color: Rgba::rgb(0, 0, 0),
                width: 1.0,
                dashed: true,
            }),
        },
    }
}
