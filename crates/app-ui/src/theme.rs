//! Appearance preferences and theme state
//!
//! The token system only accepts an explicit [`Theme`]. This module turns
//! the user's [`ColorMode`] preference plus the platform appearance into
//! that theme, and hands views a resolved [`Tokens`] bundle.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ColorMode, FixedAppearance, ThemeState};
//! use design_tokens::Theme;
//!
//! let mut state = ThemeState::default();
//! let platform = FixedAppearance(Theme::Dark);
//! assert_eq!(state.effective_theme(&platform), Theme::Dark);
//!
//! state.set_color_mode(ColorMode::Light);
//! let tokens = state.tokens(&platform);
//! assert_eq!(tokens.theme(), Theme::Light);
//! let _background = tokens.semantic().background_primary();
//! ```

use design_tokens::{Theme, Tokens};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Color Mode
// =============================================================================

/// User preference for the color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the platform appearance
    #[default]
    System,
    /// Always use the light theme
    Light,
    /// Always use the dark theme
    Dark,
}

impl ColorMode {
    /// Resolve to a concrete theme given the platform appearance
    pub fn effective(&self, system: Theme) -> Theme {
        match self {
            ColorMode::System => system,
            ColorMode::Light => Theme::Light,
            ColorMode::Dark => Theme::Dark,
        }
    }

    /// Get the mode as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::System => "system",
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::System => write!(f, "System"),
            ColorMode::Light => write!(f, "Light"),
            ColorMode::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ColorMode::System),
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}

impl From<Theme> for ColorMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
        }
    }
}

// =============================================================================
// Platform Appearance
// =============================================================================

/// Source of the platform's light/dark setting
#[cfg_attr(test, mockall::automock)]
pub trait AppearanceSource {
    /// Theme the platform is currently showing
    fn system_theme(&self) -> Theme;
}

/// Appearance pinned to one theme, for previews and headless hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedAppearance(pub Theme);

impl AppearanceSource for FixedAppearance {
    fn system_theme(&self) -> Theme {
        self.0
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Smallest allowed font scale
pub const MIN_FONT_SCALE: f32 = 0.8;
/// Largest allowed font scale
pub const MAX_FONT_SCALE: f32 = 1.4;

fn default_font_scale() -> f32 {
    1.0
}

/// Clamp to the supported range; NaN falls back to the default
fn clamp_font_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        default_font_scale()
    } else {
        scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    }
}

fn deserialize_font_scale<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    f32::deserialize(deserializer).map(clamp_font_scale)
}

/// Persisted appearance preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    /// Color scheme preference
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Font scale multiplier (0.8 - 1.4)
    #[serde(
        default = "default_font_scale",
        deserialize_with = "deserialize_font_scale"
    )]
    pub font_scale: f32,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::System,
            font_scale: default_font_scale(),
        }
    }
}

impl ThemeState {
    /// Create a theme state with the given color mode
    pub fn new(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            ..Self::default()
        }
    }

    /// Set the color mode
    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        if self.color_mode != color_mode {
            tracing::debug!(from = %self.color_mode, to = %color_mode, "Color mode changed");
        }
        self.color_mode = color_mode;
    }

    /// Set font scale, clamped to the supported range
    ///
    /// NaN resets the scale to 1.0.
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = clamp_font_scale(scale);
    }

    /// Scale a base font size by the user's preference
    pub fn scaled_font_size(&self, base: f32) -> f32 {
        base * self.font_scale
    }

    /// Theme in effect given the platform appearance
    pub fn effective_theme(&self, appearance: &dyn AppearanceSource) -> Theme {
        match self.color_mode {
            ColorMode::System => appearance.system_theme(),
            explicit => explicit.effective(Theme::Light),
        }
    }

    /// Tokens for the effective theme
    pub fn tokens(&self, appearance: &dyn AppearanceSource) -> Tokens {
        Tokens::for_theme(self.effective_theme(appearance))
    }
}
