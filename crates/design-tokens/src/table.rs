//! Runtime token tables
//!
//! A [`TokenTable`] is an ordered, read-only snapshot of one (layer, theme)
//! pair. Consumers should use the typed accessors; tables exist for tooling
//! such as catalog export and diffing.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{Result, TokenError};
use crate::layer::{Layer, Theme};
use crate::provider::TokenProvider;
use crate::value::TokenValue;

/// Name-to-value table for a single layer and theme
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTable {
    layer: Layer,
    theme: Theme,
    entries: Vec<(Cow<'static, str>, TokenValue)>,
}

impl TokenTable {
    /// Build a table from `(name, value)` pairs
    ///
    /// Fails on the first repeated name. Entry order is kept.
    pub fn from_entries<I, N>(layer: Layer, theme: Theme, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, TokenValue)>,
        N: Into<Cow<'static, str>>,
    {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();

        for (name, value) in entries {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(TokenError::DuplicateToken {
                    layer,
                    theme,
                    name: name.into_owned(),
                });
            }
            collected.push((name, value));
        }

        Ok(Self {
            layer,
            theme,
            entries: collected,
        })
    }

    /// Capture every token a provider declares
    pub fn snapshot(provider: &dyn TokenProvider) -> Self {
        let entries = provider
            .names()
            .iter()
            .filter_map(|name| {
                provider
                    .lookup(name)
                    .map(|value| (Cow::Borrowed(*name), value))
            })
            .collect();

        Self {
            layer: provider.layer(),
            theme: provider.theme(),
            entries,
        }
    }

    /// Layer of this table
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Theme of this table
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Get a value by name, reporting a miss as an error
    pub fn require(&self, name: &str) -> Result<&TokenValue> {
        self.get(name).ok_or_else(|| TokenError::NotFound {
            layer: self.layer,
            name: name.to_string(),
        })
    }

    /// Check if the table has a token with this name
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Token names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_ref())
    }

    /// Iterate over `(name, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value))
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TokenTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{CoreLight, SemanticDark, CORE_TOKEN_NAMES};
    use crate::value::{Color, Dimension};

    #[test]
    fn test_from_entries() {
        let table = TokenTable::from_entries(
            Layer::Core,
            Theme::Light,
            [
                ("Spacing4", TokenValue::from(Dimension::new(4.0))),
                ("Black", TokenValue::from(Color::BLACK)),
            ],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Black"), Some(&TokenValue::Color(Color::BLACK)));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Spacing4", "Black"]);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let result = TokenTable::from_entries(
            Layer::Semantic,
            Theme::Dark,
            [
                ("Accent", TokenValue::from(Color::WHITE)),
                ("Accent", TokenValue::from(Color::BLACK)),
            ],
        );

        assert!(matches!(
            result,
            Err(TokenError::DuplicateToken { layer: Layer::Semantic, theme: Theme::Dark, ref name })
                if name == "Accent"
        ));
    }

    #[test]
    fn test_require_reports_not_found() {
        let table = TokenTable::snapshot(&CoreLight);
        let err = table.require("Accent").unwrap_err();
        assert!(matches!(
            err,
            TokenError::NotFound { layer: Layer::Core, ref name } if name == "Accent"
        ));
        assert_eq!(err.to_string(), "Token not found in Core layer: Accent");
    }

    #[test]
    fn test_snapshot_covers_every_name() {
        let table = TokenTable::snapshot(&CoreLight);
        assert_eq!(table.layer(), Layer::Core);
        assert_eq!(table.theme(), Theme::Light);
        assert_eq!(table.len(), CORE_TOKEN_NAMES.len());
        assert!(table.names().eq(CORE_TOKEN_NAMES.iter().copied()));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let table = TokenTable::from_entries(
            Layer::Component,
            Theme::Light,
            [
                ("ButtonHeight", TokenValue::from(Dimension::new(48.0))),
                ("TabBarHeight", TokenValue::from(Dimension::new(49.0))),
            ],
        )
        .unwrap();

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"ButtonHeight":{"kind":"dimension","value":48.0},"TabBarHeight":{"kind":"dimension","value":49.0}}"#
        );
    }

    #[test]
    fn test_snapshot_values_match_provider() {
        let table = TokenTable::snapshot(&SemanticDark);
        for (name, value) in table.iter() {
            assert_eq!(SemanticDark.lookup(name).as_ref(), Some(value));
        }
    }
}
