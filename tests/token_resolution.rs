//! Token Resolution Integration Tests
//!
//! End-to-end checks across all three layers and both themes: typed
//! resolution, by-name lookup, layer isolation, catalog export and
//! concurrent readers.

use design_tokens::{
    resolve, resolve_dyn, Color, ComponentLayer, CoreLayer, Layer, SemanticLayer, Shadow, Theme,
    TokenCatalog, TokenError, TokenKind, TokenProvider, TokenTable, Tokens, COMPONENT_TOKEN_NAMES,
    CORE_TOKEN_NAMES, SEMANTIC_TOKEN_NAMES,
};
use std::collections::HashSet;
use std::sync::Once;

static INIT: Once = Once::new();

/// Route crate logs to the test harness, filtered by `RUST_LOG`
fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn names_of(layer: Layer) -> &'static [&'static str] {
    match layer {
        Layer::Core => CORE_TOKEN_NAMES,
        Layer::Semantic => SEMANTIC_TOKEN_NAMES,
        Layer::Component => COMPONENT_TOKEN_NAMES,
    }
}

/// Elevation below 1 resolves to a faint drop shadow in light mode and a
/// heavier one in dark mode
#[test]
fn test_elevation_below_1_light_and_dark() {
    let light = resolve::<CoreLayer>(Theme::Light).elevation_below_1();
    assert_eq!(light.offset_x, 0.0);
    assert_eq!(light.offset_y, 1.0);
    assert_eq!(light.blur_radius, 2.0);
    assert_eq!(light.spread_radius, 0.0);
    assert_eq!(light.color, Color::BLACK.with_alpha(0.05));

    let dark = resolve::<CoreLayer>(Theme::Dark).elevation_below_1();
    assert_ne!(dark, light);
    assert_eq!(dark.blur_radius, light.blur_radius);
    assert!(dark.color.alpha > light.color.alpha);
}

/// Every name declared for a layer resolves under both themes with the
/// same kind
#[test]
fn test_every_token_defined_in_both_themes() {
    for layer in Layer::ALL {
        let light = resolve_dyn(layer, Theme::Light);
        let dark = resolve_dyn(layer, Theme::Dark);

        assert_eq!(light.names(), dark.names());
        assert_eq!(light.names(), names_of(layer));

        for name in names_of(layer) {
            let light_value = light
                .lookup(name)
                .unwrap_or_else(|| panic!("{name} missing from {layer} light"));
            let dark_value = dark
                .lookup(name)
                .unwrap_or_else(|| panic!("{name} missing from {layer} dark"));
            assert_eq!(light_value.kind(), dark_value.kind(), "{layer}/{name}");
        }
    }
}

/// Names are unique within a layer
#[test]
fn test_token_names_are_unique_per_layer() {
    for layer in Layer::ALL {
        let names = names_of(layer);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate name in {layer}");
    }
}

/// A token of one layer is not reachable through another layer's provider
#[test]
fn test_layers_do_not_leak() {
    for theme in Theme::ALL {
        let core = resolve_dyn(Layer::Core, theme);
        let semantic = resolve_dyn(Layer::Semantic, theme);
        let component = resolve_dyn(Layer::Component, theme);

        assert!(core.lookup("BackgroundPrimary").is_none());
        assert!(core.lookup("ButtonPrimaryFill").is_none());
        assert!(semantic.lookup("Neutral0").is_none());
        assert!(semantic.lookup("ButtonPrimaryFill").is_none());
        assert!(component.lookup("Orange500").is_none());
        assert!(component.lookup("Accent").is_none());
    }
}

/// Themes differ where the palette flips and agree where it doesn't
#[test]
fn test_theme_specific_values() {
    let light = Tokens::for_theme(Theme::Light);
    let dark = Tokens::for_theme(Theme::Dark);

    assert_ne!(
        light.semantic().background_primary(),
        dark.semantic().background_primary()
    );
    assert_ne!(light.semantic().text_primary(), dark.semantic().text_primary());

    assert_eq!(light.core().black(), dark.core().black());
    assert_eq!(light.core().spacing_16(), dark.core().spacing_16());
    assert_eq!(
        light.component().button_height(),
        dark.component().button_height()
    );
}

/// Semantic and Component values are built from the layer below
#[test]
fn test_layers_compose() {
    for theme in Theme::ALL {
        let tokens = Tokens::for_theme(theme);

        assert_eq!(
            tokens.component().button_primary_fill(),
            tokens.semantic().accent()
        );
        assert_eq!(
            tokens.component().card_corner_radius(),
            tokens.semantic().corner_radius_card()
        );
    }
}

/// Resolving twice yields identical values
#[test]
fn test_resolution_is_deterministic() {
    for layer in Layer::ALL {
        for theme in Theme::ALL {
            let first = TokenTable::snapshot(resolve_dyn(layer, theme));
            let second = TokenTable::snapshot(resolve_dyn(layer, theme));
            assert_eq!(first, second);
        }
    }
}

/// The unusually named tokens are exported under their established names
#[test]
fn test_legacy_token_names_are_exported() {
    for theme in Theme::ALL {
        assert_eq!(
            resolve_dyn(Layer::Core, theme).kind_of("BorderSpacingSmall"),
            Some(TokenKind::Dimension)
        );
        assert_eq!(
            resolve_dyn(Layer::Component, theme).kind_of("IconOnOrangeFill"),
            Some(TokenKind::Color)
        );
    }
    assert_eq!(
        resolve::<ComponentLayer>(Theme::Light).icon_on_orange_fill(),
        resolve::<SemanticLayer>(Theme::Light).text_on_accent()
    );
}

/// Table lookups report misses with the layer and name
#[test]
fn test_table_lookup_errors() {
    let table = TokenTable::snapshot(resolve_dyn(Layer::Semantic, Theme::Dark));
    assert!(table.require("Accent").is_ok());

    let err = table.require("Orange500").unwrap_err();
    assert!(matches!(
        err,
        TokenError::NotFound { layer: Layer::Semantic, ref name } if name == "Orange500"
    ));
}

/// Catalog export round-trips through JSON with every token present
#[test]
fn test_catalog_export() {
    init_tracing();

    let catalog = TokenCatalog::build();
    assert!(catalog.asymmetries().is_empty());

    let json = catalog.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for layer in Layer::ALL {
        for theme in Theme::ALL {
            let table = &value[layer.as_str()][theme.as_str()];
            let object = table.as_object().unwrap();
            assert_eq!(object.len(), names_of(layer).len());
        }
    }

    assert_eq!(
        value["core"]["dark"]["ElevationBelow1"]["kind"],
        serde_json::json!("shadow")
    );
}

/// Shadow tokens resolve through the typed and by-name paths identically
#[test]
fn test_shadow_tokens_agree_across_paths() {
    for theme in Theme::ALL {
        let typed: Shadow = resolve::<SemanticLayer>(theme).shadow_card();
        let named = resolve_dyn(Layer::Semantic, theme)
            .lookup("ShadowCard")
            .and_then(|value| value.as_shadow());
        assert_eq!(named, Some(typed));
    }
}

/// Many tasks resolving at once all see the same values
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolution() {
    init_tracing();

    let expected: Vec<_> = Theme::ALL
        .iter()
        .map(|theme| Tokens::for_theme(*theme).semantic().background_primary())
        .collect();

    let mut handles = Vec::new();
    for i in 0..64 {
        let theme = Theme::ALL[i % 2];
        handles.push(tokio::spawn(async move {
            let tokens = Tokens::for_theme(theme);
            (
                theme,
                tokens.semantic().background_primary(),
                tokens.core().elevation_below_1(),
            )
        }));
    }

    for handle in handles {
        let (theme, background, shadow) = handle.await.unwrap();
        let index = Theme::ALL.iter().position(|t| *t == theme).unwrap();
        assert_eq!(background, expected[index]);
        assert_eq!(shadow, resolve::<CoreLayer>(theme).elevation_below_1());
    }
}

/// Plain threads can share the static providers without synchronization
#[test]
fn test_threads_share_providers() {
    let provider: &'static dyn TokenProvider = resolve_dyn(Layer::Component, Theme::Dark);

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || TokenTable::snapshot(provider)))
            .collect();

        let tables: Vec<_> = workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect();
        assert!(tables.windows(2).all(|pair| pair[0] == pair[1]));
    });
}
