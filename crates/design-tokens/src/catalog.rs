//! Token catalog export
//!
//! Snapshots all six (layer, theme) tables so they can be diffed or written
//! back out as JSON for the design tool.

use std::collections::BTreeMap;

use crate::error::{Result, TokenError};
use crate::layer::{Layer, Theme};
use crate::resolver::resolve_dyn;
use crate::table::TokenTable;

/// A token name defined under one theme but not the other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asymmetry {
    /// Layer the name belongs to
    pub layer: Layer,
    /// Offending token name
    pub name: String,
    /// The only theme that defines it
    pub defined_in: Theme,
}

/// Every token table, keyed by layer and theme
#[derive(Debug, Clone, PartialEq)]
pub struct TokenCatalog {
    tables: Vec<TokenTable>,
}

impl TokenCatalog {
    /// Snapshot the built-in providers
    pub fn build() -> Self {
        let tables: Vec<TokenTable> = Layer::ALL
            .iter()
            .flat_map(|layer| {
                Theme::ALL
                    .iter()
                    .map(move |theme| TokenTable::snapshot(resolve_dyn(*layer, *theme)))
            })
            .collect();

        tracing::debug!(
            tables = tables.len(),
            tokens = tables.iter().map(TokenTable::len).sum::<usize>(),
            "Built token catalog"
        );

        Self { tables }
    }

    /// Assemble a catalog from hand-built tables
    ///
    /// Each (layer, theme) pair may appear at most once.
    pub fn from_tables(tables: Vec<TokenTable>) -> Result<Self> {
        for (index, table) in tables.iter().enumerate() {
            let repeated = tables[..index].iter().any(|earlier| {
                earlier.layer() == table.layer() && earlier.theme() == table.theme()
            });
            if repeated {
                return Err(TokenError::DuplicateTable {
                    layer: table.layer(),
                    theme: table.theme(),
                });
            }
        }

        Ok(Self { tables })
    }

    /// Table for a layer and theme
    pub fn table(&self, layer: Layer, theme: Theme) -> Option<&TokenTable> {
        self.tables
            .iter()
            .find(|table| table.layer() == layer && table.theme() == theme)
    }

    /// All tables in catalog order
    pub fn tables(&self) -> &[TokenTable] {
        &self.tables
    }

    /// Names that exist in only one theme of a layer
    pub fn asymmetries(&self) -> Vec<Asymmetry> {
        let mut found = Vec::new();

        for layer in Layer::ALL {
            let (Some(light), Some(dark)) = (
                self.table(layer, Theme::Light),
                self.table(layer, Theme::Dark),
            ) else {
                continue;
            };

            for (table, other) in [(light, dark), (dark, light)] {
                found.extend(
                    table
                        .names()
                        .filter(|name| !other.contains(name))
                        .map(|name| Asymmetry {
                            layer,
                            name: name.to_string(),
                            defined_in: table.theme(),
                        }),
                );
            }
        }

        if !found.is_empty() {
            tracing::warn!(count = found.len(), "Token catalog is asymmetric");
        }

        found
    }

    /// Serialize as `layer -> theme -> name -> value`
    pub fn to_json(&self) -> Result<String> {
        let mut nested: BTreeMap<&str, BTreeMap<&str, &TokenTable>> = BTreeMap::new();
        for table in &self.tables {
            nested
                .entry(table.layer().as_str())
                .or_default()
                .insert(table.theme().as_str(), table);
        }

        Ok(serde_json::to_string_pretty(&nested)?)
    }
}
