//! Theme and layer selectors
//!
//! Both are closed enums, so an invalid selector cannot reach the resolver.
//! String parsing is provided for tooling and fails on unknown input
//! instead of falling back to a default.

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

// =============================================================================
// Theme
// =============================================================================

/// Theme variant a token resolves under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
}

impl Theme {
    /// Every theme, in declaration order
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Get the theme as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(TokenError::UnknownTheme(s.to_string())),
        }
    }
}

// =============================================================================
// Layer
// =============================================================================

/// Abstraction tier a token belongs to
///
/// Semantic tokens are written in terms of Core tokens and Component tokens
/// in terms of Semantic tokens. The order is a design convention; nothing
/// stops a Component token from holding a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Raw primitives (hues, scales, elevations)
    Core,
    /// Contextual meaning (background, danger, accent)
    Semantic,
    /// UI-element specific values (button fill, tab bar shadow)
    Component,
}

impl Layer {
    /// Every layer, from most primitive to most specific
    pub const ALL: [Layer; 3] = [Layer::Core, Layer::Semantic, Layer::Component];

    /// Get the layer as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Core => "core",
            Layer::Semantic => "semantic",
            Layer::Component => "component",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Core => write!(f, "Core"),
            Layer::Semantic => write!(f, "Semantic"),
            Layer::Component => write!(f, "Component"),
        }
    }
}

impl std::str::FromStr for Layer {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(Layer::Core),
            "semantic" => Ok(Layer::Semantic),
            "component" => Ok(Layer::Component),
            _ => Err(TokenError::UnknownLayer(s.to_string())),
        }
    }
}
