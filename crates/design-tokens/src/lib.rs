//! Design tokens for Storefront
//!
//! This crate resolves symbolic design tokens to concrete values across
//! three layers and two themes.
//!
//! # Layers
//!
//! - [`CoreTokens`] - raw primitives (hues, scales, elevation shadows)
//! - [`SemanticTokens`] - contextual meaning, written in terms of Core
//! - [`ComponentTokens`] - per-component values, written in terms of Semantic
//!
//! Each layer has a light and a dark conformance ([`CoreLight`],
//! [`CoreDark`], ...). Both are generated from one declaration, so a token
//! that exists in one theme always exists in the other, and a misspelled
//! token is a compile error rather than a runtime miss.
//!
//! # Modules
//!
//! - [`value`] - Color, Dimension and Shadow value types
//! - [`layer`] - Theme and Layer selectors
//! - [`layers`] - The three token tables
//! - [`resolver`] - (layer, theme) to provider dispatch
//! - [`table`] - Runtime snapshots for tooling
//! - [`catalog`] - Full catalog export
//!
//! # Example
//!
//! ```rust
//! use design_tokens::{resolve, SemanticLayer, Theme, Tokens};
//!
//! let background = resolve::<SemanticLayer>(Theme::Dark).background_primary();
//! assert_eq!(background.to_hex(), "#000000");
//!
//! let tokens = Tokens::for_theme(Theme::Light);
//! let radius = tokens.semantic().corner_radius_card().points();
//! assert_eq!(radius, 12.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod catalog;
pub mod error;
pub mod layer;
pub mod layers;
pub mod provider;
pub mod resolver;
pub mod table;
pub mod value;

// Re-export commonly used types
pub use catalog::{Asymmetry, TokenCatalog};
pub use error::{Result, TokenError};
pub use layer::{Layer, Theme};
pub use layers::{
    ComponentDark, ComponentLight, ComponentTokens, CoreDark, CoreLight, CoreTokens,
    SemanticDark, SemanticLight, SemanticTokens, COMPONENT_TOKEN_NAMES, CORE_TOKEN_NAMES,
    SEMANTIC_TOKEN_NAMES,
};
pub use provider::TokenProvider;
pub use resolver::{
    resolve, resolve_dyn, ComponentLayer, CoreLayer, SemanticLayer, TokenLayer, Tokens,
};
pub use table::TokenTable;
pub use value::{Color, Dimension, Shadow, TokenKind, TokenValue};
