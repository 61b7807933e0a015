//! Semantic layer: contextual meaning
//!
//! Every entry reads a Core accessor for the same theme, so a change to a
//! Core literal carries through here without a second edit.

use super::core::{CoreDark, CoreLight, CoreTokens};
use crate::value::{Color, Dimension, Shadow};

design_tokens! {
    /// Tokens named for what they mean rather than what they look like
    pub trait SemanticTokens: Semantic;
    light SemanticLight;
    dark SemanticDark;
    names SEMANTIC_TOKEN_NAMES;

    // Backgrounds and surfaces

    /// Screen background
    background_primary: Color = "BackgroundPrimary" {
        light: CoreLight.neutral_0(),
        dark: CoreDark.neutral_0(),
    }
    /// Grouped content behind the primary background
    background_secondary: Color = "BackgroundSecondary" {
        light: CoreLight.neutral_50(),
        dark: CoreDark.neutral_50(),
    }
    background_tertiary: Color = "BackgroundTertiary" {
        light: CoreLight.neutral_100(),
        dark: CoreDark.neutral_100(),
    }
    /// Cards, bars and sheets sitting above the background
    surface_elevated: Color = "SurfaceElevated" {
        light: CoreLight.white(),
        dark: CoreDark.neutral_100(),
    }
    /// Dimming layer behind modal content
    overlay: Color = "Overlay" {
        light: CoreLight.black().with_alpha(0.4),
        dark: CoreDark.black().with_alpha(0.6),
    }

    // Text

    text_primary: Color = "TextPrimary" {
        light: CoreLight.neutral_1000(),
        dark: CoreDark.neutral_1000(),
    }
    text_secondary: Color = "TextSecondary" {
        light: CoreLight.neutral_700(),
        dark: CoreDark.neutral_700(),
    }
    text_tertiary: Color = "TextTertiary" {
        light: CoreLight.neutral_500(),
        dark: CoreDark.neutral_500(),
    }
    text_disabled: Color = "TextDisabled" {
        light: CoreLight.neutral_300(),
        dark: CoreDark.neutral_300(),
    }
    /// Text placed on an accent or status fill
    text_on_accent: Color = "TextOnAccent" {
        light: CoreLight.white(),
        dark: CoreDark.white(),
    }

    // Borders

    border_subtle: Color = "BorderSubtle" {
        light: CoreLight.neutral_100(),
        dark: CoreDark.neutral_200(),
    }
    border_strong: Color = "BorderStrong" {
        light: CoreLight.neutral_300(),
        dark: CoreDark.neutral_300(),
    }
    /// Keyboard and accessibility focus ring
    focus: Color = "Focus" {
        light: CoreLight.blue_500(),
        dark: CoreDark.blue_500(),
    }

    // Accent and status

    /// Brand accent for primary actions
    accent: Color = "Accent" {
        light: CoreLight.orange_500(),
        dark: CoreDark.orange_500(),
    }
    accent_pressed: Color = "AccentPressed" {
        light: CoreLight.orange_700(),
        dark: CoreDark.orange_700(),
    }
    accent_subtle: Color = "AccentSubtle" {
        light: CoreLight.orange_100(),
        dark: CoreDark.orange_100(),
    }
    /// Errors, destructive actions and sale prices
    danger: Color = "Danger" {
        light: CoreLight.red_500(),
        dark: CoreDark.red_500(),
    }
    danger_subtle: Color = "DangerSubtle" {
        light: CoreLight.red_100(),
        dark: CoreDark.red_100(),
    }
    success: Color = "Success" {
        light: CoreLight.green_500(),
        dark: CoreDark.green_500(),
    }
    success_subtle: Color = "SuccessSubtle" {
        light: CoreLight.green_100(),
        dark: CoreDark.green_100(),
    }
    warning: Color = "Warning" {
        light: CoreLight.yellow_500(),
        dark: CoreDark.yellow_500(),
    }
    info: Color = "Info" {
        light: CoreLight.blue_700(),
        dark: CoreDark.blue_700(),
    }

    // Shape

    corner_radius_control: Dimension = "CornerRadiusControl" {
        light: CoreLight.radius_medium(),
        dark: CoreDark.radius_medium(),
    }
    corner_radius_card: Dimension = "CornerRadiusCard" {
        light: CoreLight.radius_large(),
        dark: CoreDark.radius_large(),
    }
    corner_radius_sheet: Dimension = "CornerRadiusSheet" {
        light: CoreLight.radius_extra_large(),
        dark: CoreDark.radius_extra_large(),
    }
    corner_radius_pill: Dimension = "CornerRadiusPill" {
        light: CoreLight.radius_full(),
        dark: CoreDark.radius_full(),
    }
    divider_width: Dimension = "DividerWidth" {
        light: CoreLight.border_width_thin(),
        dark: CoreDark.border_width_thin(),
    }
    border_width_control: Dimension = "BorderWidthControl" {
        light: CoreLight.border_width_regular(),
        dark: CoreDark.border_width_regular(),
    }
    border_width_focus: Dimension = "BorderWidthFocus" {
        light: CoreLight.border_width_thick(),
        dark: CoreDark.border_width_thick(),
    }

    // Layout

    /// Gap between items on one line
    spacing_inline: Dimension = "SpacingInline" {
        light: CoreLight.spacing_8(),
        dark: CoreDark.spacing_8(),
    }
    /// Gap between stacked items
    spacing_stack: Dimension = "SpacingStack" {
        light: CoreLight.spacing_12(),
        dark: CoreDark.spacing_12(),
    }
    /// Padding inside a container
    spacing_inset: Dimension = "SpacingInset" {
        light: CoreLight.spacing_16(),
        dark: CoreDark.spacing_16(),
    }
    spacing_section: Dimension = "SpacingSection" {
        light: CoreLight.spacing_32(),
        dark: CoreDark.spacing_32(),
    }

    // Motion

    motion_quick: Dimension = "MotionQuick" {
        light: CoreLight.duration_fast(),
        dark: CoreDark.duration_fast(),
    }
    motion_standard: Dimension = "MotionStandard" {
        light: CoreLight.duration_regular(),
        dark: CoreDark.duration_regular(),
    }
    motion_emphasized: Dimension = "MotionEmphasized" {
        light: CoreLight.duration_slow(),
        dark: CoreDark.duration_slow(),
    }

    // Elevation

    shadow_card: Shadow = "ShadowCard" {
        light: CoreLight.elevation_below_1(),
        dark: CoreDark.elevation_below_1(),
    }
    shadow_raised: Shadow = "ShadowRaised" {
        light: CoreLight.elevation_below_2(),
        dark: CoreDark.elevation_below_2(),
    }
    shadow_overlay: Shadow = "ShadowOverlay" {
        light: CoreLight.elevation_below_3(),
        dark: CoreDark.elevation_below_3(),
    }
    shadow_bottom_bar: Shadow = "ShadowBottomBar" {
        light: CoreLight.elevation_above_1(),
        dark: CoreDark.elevation_above_1(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TokenProvider;

    #[test]
    fn test_background_differs_by_theme() {
        assert_ne!(
            SemanticLight.background_primary(),
            SemanticDark.background_primary()
        );
        assert_eq!(SemanticLight.background_primary(), Color::WHITE);
        assert_eq!(SemanticDark.background_primary(), Color::BLACK);
    }

    #[test]
    fn test_danger_derives_from_core_red() {
        assert_eq!(SemanticLight.danger(), CoreLight.red_500());
        assert_eq!(SemanticDark.danger(), CoreDark.red_500());
    }

    #[test]
    fn test_shadows_derive_from_core_elevation() {
        assert_eq!(SemanticLight.shadow_card(), CoreLight.elevation_below_1());
        assert_eq!(SemanticDark.shadow_card(), CoreDark.elevation_below_1());
        assert!(SemanticLight.shadow_bottom_bar().offset_y < 0.0);
    }

    #[test]
    fn test_overlay_is_translucent() {
        assert!(!SemanticLight.overlay().is_opaque());
        assert!(SemanticDark.overlay().alpha > SemanticLight.overlay().alpha);
    }

    #[test]
    fn test_text_on_accent_is_fixed_white() {
        assert_eq!(SemanticLight.text_on_accent(), Color::WHITE);
        assert_eq!(SemanticDark.text_on_accent(), Color::WHITE);
    }

    #[test]
    fn test_spacing_ascends() {
        let semantic = SemanticDark;
        assert!(semantic.spacing_inline() < semantic.spacing_stack());
        assert!(semantic.spacing_stack() < semantic.spacing_inset());
        assert!(semantic.spacing_inset() < semantic.spacing_section());
    }

    #[test]
    fn test_does_not_expose_core_names() {
        for name in super::super::core::CORE_TOKEN_NAMES {
            assert!(!SemanticLight.contains(name), "{name} leaked into Semantic");
        }
    }
}
