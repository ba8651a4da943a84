//! Colors: RGBA values and user-selectable marker colors.
//!
//! Marker colors accept the common named colors (`red`, `lightblue`, ...), single-letter
//! shorthands (`r`, `g`, `b`, `c`, `m`, `y`, `k`, `w`) and hex (`#f00`, `#ff0000`).

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha set from a 0.0..=1.0 opacity.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("red", Rgba::rgb(255, 0, 0)),
    ("darkred", Rgba::rgb(139, 0, 0)),
    ("crimson", Rgba::rgb(220, 20, 60)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("darkorange", Rgba::rgb(255, 140, 0)),
    ("gold", Rgba::rgb(255, 215, 0)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("darkgreen", Rgba::rgb(0, 100, 0)),
    ("lime", Rgba::rgb(0, 255, 0)),
    ("lightgreen", Rgba::rgb(144, 238, 144)),
    ("olive", Rgba::rgb(128, 128, 0)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("lightblue", Rgba::rgb(173, 216, 230)),
    ("skyblue", Rgba::rgb(135, 206, 235)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("violet", Rgba::rgb(238, 130, 238)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("pink", Rgba::rgb(255, 192, 203)),
    ("brown", Rgba::rgb(165, 42, 42)),
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("silver", Rgba::rgb(192, 192, 192)),
    // single-letter shorthands
    ("r", Rgba::rgb(255, 0, 0)),
    ("g", Rgba::rgb(0, 128, 0)),
    ("b", Rgba::rgb(0, 0, 255)),
    ("c", Rgba::rgb(0, 191, 191)),
    ("m", Rgba::rgb(191, 0, 191)),
    ("y", Rgba::rgb(191, 191, 0)),
    ("k", Rgba::rgb(0, 0, 0)),
    ("w", Rgba::rgb(255, 255, 255)),
];

/// Marker color chosen by a user; keeps the original spelling for replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerColor {
    name: String,
    rgba: Rgba,
}

impl MarkerColor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    /// Names accepted besides hex values, without the single-letter shorthands.
    pub fn known_names() -> impl Iterator<Item = &'static str> {
        NAMED_COLORS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| name.len() > 1)
    }
}

impl Default for MarkerColor {
    fn default() -> Self {
        Self {
            name: "red".to_string(),
            rgba: Rgba::rgb(255, 0, 0),
        }
    }
}

impl FromStr for MarkerColor {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let rgba = NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgba)| *rgba)
            .or_else(|| Rgba::from_hex(&lower))
            .ok_or_else(|| RenderError::InvalidColor(trimmed.to_string()))?;

        Ok(Self {
            name: trimmed.to_string(),
            rgba,
        })
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
