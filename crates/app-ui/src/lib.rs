//! User interface for Storefront
//!
//! This crate sits on top of `design-tokens`. It owns the user's appearance
//! preference and turns it into a resolved token bundle, then computes
//! component styles from that bundle.
//!
//! # Modules
//!
//! - [`theme`] - Color mode preference, platform appearance and theme state
//! - [`components`] - UI components with token-driven styles
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::Button;
//! use app_ui::theme::{ColorMode, FixedAppearance, ThemeState};
//! use design_tokens::Theme;
//!
//! let state = ThemeState::new(ColorMode::System);
//! let tokens = state.tokens(&FixedAppearance(Theme::Dark));
//!
//! let styles = Button::new("Add to bag").computed_styles(&tokens);
//! assert_eq!(styles.height.points(), 48.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod theme;

// Re-export commonly used types
pub use components::{
    Badge, BadgeKind, BadgeStyles, Button, ButtonStyles, ButtonVariant, Card, CardStyles,
    ProductTile, ProductTileStyles, Sheet, SheetStyles, TabBar, TabBarStyles, TextField,
    TextFieldStyles, ValidationState,
};
pub use theme::{
    AppearanceSource, ColorMode, FixedAppearance, ThemeState, MAX_FONT_SCALE, MIN_FONT_SCALE,
};
