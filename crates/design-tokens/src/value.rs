//! Token value types
//!
//! A token holds exactly one of three shapes: a [`Color`], a scalar
//! [`Dimension`], or a composite [`Shadow`]. All of them are plain `Copy`
//! values with structural equality.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, TokenError};

// =============================================================================
// Color
// =============================================================================

/// An sRGB color with 8-bit channels and a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Opacity from 0.0 (transparent) to 1.0 (opaque)
    pub alpha: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0.0);

    /// Create an opaque color from channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Create a color from channels and alpha
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Same channels with a different alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| TokenError::InvalidColor(hex.to_string()))
        };

        let red = channel(0..2)?;
        let green = channel(2..4)?;
        let blue = channel(4..6)?;
        let alpha = if digits.len() == 8 {
            f32::from(channel(6..8)?) / 255.0
        } else {
            1.0
        };

        Ok(Self::rgba(red, green, blue, alpha))
    }

    /// Convert to `#RRGGBB`, with an `AA` suffix when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            let alpha = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue, alpha
            )
        }
    }

    /// Check if the color has full opacity
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A unit-less scalar
///
/// Radii, spacing and widths are read as points; motion tokens are read as
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(f32);

impl Dimension {
    /// Zero-length dimension
    pub const ZERO: Dimension = Dimension(0.0);

    /// Wrap a raw scalar
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Raw scalar value, interpreted as points
    pub const fn points(self) -> f32 {
        self.0
    }

    /// Interpret the scalar as seconds
    ///
    /// Negative values and NaN clamp to zero; values too large for a
    /// [`Duration`] saturate to [`Duration::MAX`].
    pub fn as_duration(self) -> Duration {
        Duration::try_from_secs_f32(self.0.max(0.0)).unwrap_or(Duration::MAX)
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Shadow
// =============================================================================

/// Drop shadow definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur_radius: f32,
    /// Spread radius
    pub spread_radius: f32,
    /// Shadow color (with alpha)
    pub color: Color,
}

impl Shadow {
    /// No shadow
    pub const NONE: Shadow = Shadow::new(0.0, 0.0, 0.0, 0.0, Color::CLEAR);

    /// Create a new shadow
    pub const fn new(
        offset_x: f32,
        offset_y: f32,
        blur_radius: f32,
        spread_radius: f32,
        color: Color,
    ) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            spread_radius,
            color,
        }
    }
}

// =============================================================================
// Token Value
// =============================================================================

/// Discriminant of a [`TokenValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A [`Color`] value
    Color,
    /// A [`Dimension`] value
    Dimension,
    /// A [`Shadow`] value
    Shadow,
}

/// Payload of a token under one theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TokenValue {
    /// Color payload
    Color(Color),
    /// Scalar payload
    Dimension(Dimension),
    /// Shadow payload
    Shadow(Shadow),
}

impl TokenValue {
    /// Which shape this value has
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Color(_) => TokenKind::Color,
            TokenValue::Dimension(_) => TokenKind::Dimension,
            TokenValue::Shadow(_) => TokenKind::Shadow,
        }
    }

    /// Get the color, if this is a color token
    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Get the dimension, if this is a dimension token
    pub fn as_dimension(&self) -> Option<Dimension> {
        match self {
            TokenValue::Dimension(dimension) => Some(*dimension),
            _ => None,
        }
    }

    /// Get the shadow, if this is a shadow token
    pub fn as_shadow(&self) -> Option<Shadow> {
        match self {
            TokenValue::Shadow(shadow) => Some(*shadow),
            _ => None,
        }
    }
}

impl From<Color> for TokenValue {
    fn from(color: Color) -> Self {
        TokenValue::Color(color)
    }
}

impl From<Dimension> for TokenValue {
    fn from(dimension: Dimension) -> Self {
        TokenValue::Dimension(dimension)
    }
}

impl From<Shadow> for TokenValue {
    fn from(shadow: Shadow) -> Self {
        TokenValue::Shadow(shadow)
    }
}
