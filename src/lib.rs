//! Storefront design system
//!
//! Facade over the workspace crates:
//!
//! - [`design_tokens`] - Token layers, themes and the resolver
//! - [`app_ui`] - Appearance preferences and token-driven component styles
//!
//! # Example
//!
//! ```rust
//! use storefront::app_ui::{Badge, BadgeKind, ColorMode, FixedAppearance, ThemeState};
//! use storefront::design_tokens::{Theme, TokenCatalog};
//!
//! let state = ThemeState::new(ColorMode::System);
//! let tokens = state.tokens(&FixedAppearance(Theme::Dark));
//! let badge = Badge::new(BadgeKind::Sale).computed_styles(&tokens);
//! assert_eq!(badge.background, tokens.component().badge_sale_fill());
//!
//! assert!(TokenCatalog::build().asymmetries().is_empty());
//! ```

#![warn(missing_docs)]

pub use app_ui;
pub use design_tokens;
