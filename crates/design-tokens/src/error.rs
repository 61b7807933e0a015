//! Error types for token lookups and tooling
//!
//! Schema problems (a token missing from one theme, a name declared twice)
//! never reach this type: they fail the build. `TokenError` only covers the
//! runtime paths used by tooling, such as parsing theme names, by-name
//! lookups and catalog export.

use thiserror::Error;

use crate::layer::{Layer, Theme};

/// Errors that can occur in runtime token operations
#[derive(Debug, Error)]
pub enum TokenError {
    /// Theme name did not match a known variant
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Layer name did not match a known variant
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    /// No token with this name exists in the layer
    #[error("Token not found in {layer} layer: {name}")]
    NotFound {
        /// Layer that was searched
        layer: Layer,
        /// Requested token name
        name: String,
    },

    /// The same name appeared twice while building a table
    #[error("Duplicate token {name} in {layer}/{theme} table")]
    DuplicateToken {
        /// Layer of the table being built
        layer: Layer,
        /// Theme of the table being built
        theme: Theme,
        /// Repeated token name
        name: String,
    },

    /// Two tables were supplied for the same layer and theme
    #[error("Duplicate {layer}/{theme} table in catalog")]
    DuplicateTable {
        /// Layer of the repeated table
        layer: Layer,
        /// Theme of the repeated table
        theme: Theme,
    },

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Catalog serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
