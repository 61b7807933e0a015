//! Layer-agnostic provider interface

use crate::layer::{Layer, Theme};
use crate::value::{TokenKind, TokenValue};

/// Behaviour shared by every (layer, theme) provider
///
/// Each layer trait ([`CoreTokens`](crate::CoreTokens),
/// [`SemanticTokens`](crate::SemanticTokens),
/// [`ComponentTokens`](crate::ComponentTokens)) extends this with one typed
/// accessor per token. This trait adds the by-name view used by tooling.
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Layer this provider belongs to
    fn layer(&self) -> Layer;

    /// Theme this provider resolves under
    fn theme(&self) -> Theme;

    /// Export names of every token in the layer, in declaration order
    fn names(&self) -> &'static [&'static str];

    /// Look up a token by export name
    fn lookup(&self, name: &str) -> Option<TokenValue>;

    /// Value shape of a token, if the name exists
    fn kind_of(&self, name: &str) -> Option<TokenKind> {
        self.lookup(name).map(|value| value.kind())
    }

    /// Check if the layer declares a token with this name
    fn contains(&self, name: &str) -> bool {
        self.names().contains(&name)
    }
}
