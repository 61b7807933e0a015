//! Component layer: values bound to specific UI elements
//!
//! Entries read Semantic accessors for the same theme. Fixed control
//! metrics (button and tab bar heights) are the only literals.
//!
//! `IconOnOrangeFill` reads like a semantic token but ships with the
//! component export and keeps that home.

use super::semantic::{SemanticDark, SemanticLight, SemanticTokens};
use crate::value::{Color, Dimension, Shadow};

design_tokens! {
    /// Tokens for individual storefront components
    pub trait ComponentTokens: Component;
    light ComponentLight;
    dark ComponentDark;
    names COMPONENT_TOKEN_NAMES;

    // Button

    button_primary_fill: Color = "ButtonPrimaryFill" {
        light: SemanticLight.accent(),
        dark: SemanticDark.accent(),
    }
    button_primary_fill_pressed: Color = "ButtonPrimaryFillPressed" {
        light: SemanticLight.accent_pressed(),
        dark: SemanticDark.accent_pressed(),
    }
    button_primary_label: Color = "ButtonPrimaryLabel" {
        light: SemanticLight.text_on_accent(),
        dark: SemanticDark.text_on_accent(),
    }
    button_secondary_fill: Color = "ButtonSecondaryFill" {
        light: SemanticLight.accent_subtle(),
        dark: SemanticDark.accent_subtle(),
    }
    button_secondary_label: Color = "ButtonSecondaryLabel" {
        light: SemanticLight.accent_pressed(),
        dark: SemanticDark.accent_pressed(),
    }
    button_disabled_fill: Color = "ButtonDisabledFill" {
        light: SemanticLight.background_tertiary(),
        dark: SemanticDark.background_tertiary(),
    }
    button_disabled_label: Color = "ButtonDisabledLabel" {
        light: SemanticLight.text_disabled(),
        dark: SemanticDark.text_disabled(),
    }
    /// Glyph tint on the orange primary fill
    icon_on_orange_fill: Color = "IconOnOrangeFill" {
        light: SemanticLight.text_on_accent(),
        dark: SemanticDark.text_on_accent(),
    }
    button_corner_radius: Dimension = "ButtonCornerRadius" {
        light: SemanticLight.corner_radius_control(),
        dark: SemanticDark.corner_radius_control(),
    }
    button_height: Dimension = "ButtonHeight" {
        light: Dimension::new(48.0),
        dark: Dimension::new(48.0),
    }
    button_padding_horizontal: Dimension = "ButtonPaddingHorizontal" {
        light: SemanticLight.spacing_inset(),
        dark: SemanticDark.spacing_inset(),
    }

    // Card and product tile

    card_background: Color = "CardBackground" {
        light: SemanticLight.surface_elevated(),
        dark: SemanticDark.surface_elevated(),
    }
    card_border: Color = "CardBorder" {
        light: SemanticLight.border_subtle(),
        dark: SemanticDark.border_subtle(),
    }
    card_corner_radius: Dimension = "CardCornerRadius" {
        light: SemanticLight.corner_radius_card(),
        dark: SemanticDark.corner_radius_card(),
    }
    card_padding: Dimension = "CardPadding" {
        light: SemanticLight.spacing_inset(),
        dark: SemanticDark.spacing_inset(),
    }
    card_shadow: Shadow = "CardShadow" {
        light: SemanticLight.shadow_card(),
        dark: SemanticDark.shadow_card(),
    }
    product_tile_image_background: Color = "ProductTileImageBackground" {
        light: SemanticLight.background_secondary(),
        dark: SemanticDark.background_secondary(),
    }
    product_tile_price_text: Color = "ProductTilePriceText" {
        light: SemanticLight.text_primary(),
        dark: SemanticDark.text_primary(),
    }
    product_tile_sale_price_text: Color = "ProductTileSalePriceText" {
        light: SemanticLight.danger(),
        dark: SemanticDark.danger(),
    }

    // Badge

    badge_sale_fill: Color = "BadgeSaleFill" {
        light: SemanticLight.danger(),
        dark: SemanticDark.danger(),
    }
    badge_new_fill: Color = "BadgeNewFill" {
        light: SemanticLight.success(),
        dark: SemanticDark.success(),
    }
    badge_label: Color = "BadgeLabel" {
        light: SemanticLight.text_on_accent(),
        dark: SemanticDark.text_on_accent(),
    }
    badge_corner_radius: Dimension = "BadgeCornerRadius" {
        light: SemanticLight.corner_radius_pill(),
        dark: SemanticDark.corner_radius_pill(),
    }

    // Tab bar

    tab_bar_background: Color = "TabBarBackground" {
        light: SemanticLight.surface_elevated(),
        dark: SemanticDark.surface_elevated(),
    }
    tab_bar_item_active: Color = "TabBarItemActive" {
        light: SemanticLight.accent(),
        dark: SemanticDark.accent(),
    }
    tab_bar_item_inactive: Color = "TabBarItemInactive" {
        light: SemanticLight.text_tertiary(),
        dark: SemanticDark.text_tertiary(),
    }
    tab_bar_divider_width: Dimension = "TabBarDividerWidth" {
        light: SemanticLight.divider_width(),
        dark: SemanticDark.divider_width(),
    }
    tab_bar_height: Dimension = "TabBarHeight" {
        light: Dimension::new(49.0),
        dark: Dimension::new(49.0),
    }
    tab_bar_shadow: Shadow = "TabBarShadow" {
        light: SemanticLight.shadow_bottom_bar(),
        dark: SemanticDark.shadow_bottom_bar(),
    }

    // Sheet

    sheet_background: Color = "SheetBackground" {
        light: SemanticLight.background_primary(),
        dark: SemanticDark.surface_elevated(),
    }
    sheet_scrim: Color = "SheetScrim" {
        light: SemanticLight.overlay(),
        dark: SemanticDark.overlay(),
    }
    sheet_corner_radius: Dimension = "SheetCornerRadius" {
        light: SemanticLight.corner_radius_sheet(),
        dark: SemanticDark.corner_radius_sheet(),
    }
    sheet_present_duration: Dimension = "SheetPresentDuration" {
        light: SemanticLight.motion_emphasized(),
        dark: SemanticDark.motion_emphasized(),
    }
    sheet_shadow: Shadow = "SheetShadow" {
        light: SemanticLight.shadow_overlay(),
        dark: SemanticDark.shadow_overlay(),
    }

    // Text field

    text_field_border: Color = "TextFieldBorder" {
        light: SemanticLight.border_strong(),
        dark: SemanticDark.border_strong(),
    }
    text_field_border_focused: Color = "TextFieldBorderFocused" {
        light: SemanticLight.focus(),
        dark: SemanticDark.focus(),
    }
    text_field_border_error: Color = "TextFieldBorderError" {
        light: SemanticLight.danger(),
        dark: SemanticDark.danger(),
    }
    text_field_border_width: Dimension = "TextFieldBorderWidth" {
        light: SemanticLight.border_width_control(),
        dark: SemanticDark.border_width_control(),
    }
    text_field_border_width_focused: Dimension = "TextFieldBorderWidthFocused" {
        light: SemanticLight.border_width_focus(),
        dark: SemanticDark.border_width_focus(),
    }
    text_field_placeholder: Color = "TextFieldPlaceholder" {
        light: SemanticLight.text_tertiary(),
        dark: SemanticDark.text_tertiary(),
    }
}
