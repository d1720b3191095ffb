use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{WallpaperError, WallpaperResult};

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels widened to `i32`, for arithmetic that may leave the `0..=255` range.
    pub fn widen(self) -> [i32; 3] {
        [i32::from(self.r), i32::from(self.g), i32::from(self.b)]
    }

    /// Upper-case `RRGGBB` form (no leading `#`).
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn parse_hex(s: &str) -> WallpaperResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(WallpaperError::config(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> WallpaperResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| WallpaperError::config(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(rgb) => Ok(Self::from(rgb)),
        }
    }
}

/// Axis along which the gradient progresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right; every column is one color.
    #[default]
    #[serde(rename = "H", alias = "horizontal")]
    Horizontal,
    /// Top to bottom; every row is one color.
    #[serde(rename = "V", alias = "vertical")]
    Vertical,
}

impl Orientation {
    /// Length of the axis the gradient runs along.
    pub fn extent(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }
}

impl FromStr for Orientation {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Self::Horizontal),
            "v" | "vertical" => Ok(Self::Vertical),
            other => Err(WallpaperError::config(format!(
                "orientation must be \"H\" or \"V\", got \"{other}\""
            ))),
        }
    }
}

/// Signed pixel coordinate; anchors may legitimately sit outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPos {
    /// Build a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rendered text box, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxSize {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl BoxSize {
    /// Build a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
