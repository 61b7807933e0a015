//! Appearance Switching Integration Tests
//!
//! Drives the UI layer through color mode and platform appearance changes
//! and checks that component styles follow the resolved theme.

use app_ui::components::{Button, Card, ProductTile, Sheet, TabBar};
use app_ui::theme::{AppearanceSource, ColorMode, FixedAppearance, ThemeState};
use design_tokens::{Theme, Tokens};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Platform appearance that can be flipped at runtime
#[derive(Debug, Default)]
struct SwitchableAppearance {
    dark: AtomicBool,
}

impl SwitchableAppearance {
    fn set(&self, theme: Theme) {
        self.dark.store(theme.is_dark(), Ordering::SeqCst);
    }
}

impl AppearanceSource for SwitchableAppearance {
    fn system_theme(&self) -> Theme {
        if self.dark.load(Ordering::SeqCst) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// System mode tracks the platform as it changes
#[test]
fn test_system_mode_follows_platform() {
    let platform = SwitchableAppearance::default();
    let state = ThemeState::default();

    assert_eq!(state.effective_theme(&platform), Theme::Light);

    platform.set(Theme::Dark);
    assert_eq!(state.effective_theme(&platform), Theme::Dark);
    assert_eq!(state.tokens(&platform), Tokens::for_theme(Theme::Dark));

    platform.set(Theme::Light);
    assert_eq!(state.tokens(&platform).theme(), Theme::Light);
}

/// An explicit mode pins the theme regardless of the platform
#[test]
fn test_explicit_mode_overrides_platform() {
    let platform = SwitchableAppearance::default();
    platform.set(Theme::Dark);

    let mut state = ThemeState::default();
    state.set_color_mode(ColorMode::Light);
    assert_eq!(state.effective_theme(&platform), Theme::Light);

    platform.set(Theme::Light);
    state.set_color_mode(ColorMode::Dark);
    assert_eq!(state.effective_theme(&platform), Theme::Dark);

    state.set_color_mode(ColorMode::System);
    assert_eq!(state.effective_theme(&platform), Theme::Light);
}

/// Component styles change with the theme without any theme checks in views
#[test]
fn test_component_styles_follow_theme() {
    let mut state = ThemeState::new(ColorMode::Light);
    let platform = FixedAppearance(Theme::Light);

    let button = Button::new("Add to bag");
    let card = Card::new().elevated();
    let tab_bar = TabBar::new(["Shop", "Bag"]);

    let light_button = button.computed_styles(&state.tokens(&platform));
    let light_card = card.computed_styles(&state.tokens(&platform));
    let light_bar = tab_bar.computed_styles(&state.tokens(&platform));

    state.set_color_mode(ColorMode::Dark);
    let tokens = state.tokens(&platform);

    let dark_button = button.computed_styles(&tokens);
    let dark_card = card.computed_styles(&tokens);
    let dark_bar = tab_bar.computed_styles(&tokens);

    assert_eq!(dark_button.background, tokens.component().button_primary_fill());
    assert_eq!(dark_button.height, light_button.height);
    assert_ne!(dark_card.shadow, light_card.shadow);
    assert_ne!(dark_bar.background, light_bar.background);
}

/// The sheet lifts to the elevated surface in dark mode
#[test]
fn test_sheet_surface_per_theme() {
    let sheet = Sheet::new();

    let light = Tokens::for_theme(Theme::Light);
    let dark = Tokens::for_theme(Theme::Dark);

    assert_eq!(
        sheet.computed_styles(&light).background,
        light.semantic().background_primary()
    );
    assert_eq!(
        sheet.computed_styles(&dark).background,
        dark.semantic().surface_elevated()
    );
}

/// A sale tile uses the sale price color and badge in both themes
#[test]
fn test_sale_tile_in_both_themes() {
    let tile = ProductTile::new("Linen Shirt", "$39").on_sale("$58");

    for theme in Theme::ALL {
        let tokens = Tokens::for_theme(theme);
        let styles = tile.computed_styles(&tokens);

        assert_eq!(
            styles.price_color,
            tokens.component().product_tile_sale_price_text()
        );
        assert_eq!(
            styles.badge.map(|badge| badge.background),
            Some(tokens.component().badge_sale_fill())
        );
    }
}

/// Preferences survive a save and restore
#[test]
fn test_theme_state_persistence() {
    let mut state = ThemeState::default();
    state.set_color_mode(ColorMode::Dark);
    state.set_font_scale(1.2);

    let json = serde_json::to_string(&state).unwrap();
    let restored: ThemeState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert_eq!(
        restored.effective_theme(&FixedAppearance(Theme::Light)),
        Theme::Dark
    );
}

/// Readers on other threads see platform changes
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_platform_change_visible_across_tasks() {
    let platform = Arc::new(SwitchableAppearance::default());
    let state = ThemeState::default();

    platform.set(Theme::Dark);

    let reader = {
        let platform = Arc::clone(&platform);
        let state = state.clone();
        tokio::spawn(async move { state.tokens(platform.as_ref()).theme() })
    };

    assert_eq!(reader.await.unwrap(), Theme::Dark);
}
