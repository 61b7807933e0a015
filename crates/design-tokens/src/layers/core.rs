//! Core layer: raw primitives
//!
//! Hue ramps, neutral ramp, radius and spacing scales, border widths,
//! motion durations and elevation shadows. Neutral ramps run from the
//! background end (`Neutral0`) to the foreground end (`Neutral1000`), so
//! they flip between themes. Hue ramps are brightened for dark.
//!
//! `BorderSpacingSmall` is an inset rather than a stroke width, but it is
//! exported under the border group and keeps that name.

use crate::value::{Color, Dimension, Shadow};

design_tokens! {
    /// Core primitives every higher layer is built from
    pub trait CoreTokens: Core;
    light CoreLight;
    dark CoreDark;
    names CORE_TOKEN_NAMES;

    // Fixed

    /// Pure black, identical in both themes
    black: Color = "Black" {
        light: Color::BLACK,
        dark: Color::BLACK,
    }
    /// Pure white, identical in both themes
    white: Color = "White" {
        light: Color::WHITE,
        dark: Color::WHITE,
    }

    // Neutral ramp

    neutral_0: Color = "Neutral0" {
        light: Color::from_hex(0xFFFFFF),
        dark: Color::from_hex(0x000000),
    }
    neutral_50: Color = "Neutral50" {
        light: Color::from_hex(0xF7F7F8),
        dark: Color::from_hex(0x0F0F11),
    }
    neutral_100: Color = "Neutral100" {
        light: Color::from_hex(0xEFEFF1),
        dark: Color::from_hex(0x1C1C1F),
    }
    neutral_200: Color = "Neutral200" {
        light: Color::from_hex(0xE0E0E4),
        dark: Color::from_hex(0x2A2A2E),
    }
    neutral_300: Color = "Neutral300" {
        light: Color::from_hex(0xC7C7CC),
        dark: Color::from_hex(0x3A3A3F),
    }
    neutral_500: Color = "Neutral500" {
        light: Color::from_hex(0x8E8E93),
        dark: Color::from_hex(0x8E8E93),
    }
    neutral_700: Color = "Neutral700" {
        light: Color::from_hex(0x48484A),
        dark: Color::from_hex(0xC7C7CC),
    }
    neutral_900: Color = "Neutral900" {
        light: Color::from_hex(0x1C1C1E),
        dark: Color::from_hex(0xEFEFF1),
    }
    neutral_1000: Color = "Neutral1000" {
        light: Color::from_hex(0x000000),
        dark: Color::from_hex(0xFFFFFF),
    }

    // Brand orange

    orange_100: Color = "Orange100" {
        light: Color::from_hex(0xFFF1E6),
        dark: Color::from_hex(0x3D2210),
    }
    /// Brand orange
    orange_500: Color = "Orange500" {
        light: Color::from_hex(0xFF7A1A),
        dark: Color::from_hex(0xFF8A33),
    }
    orange_700: Color = "Orange700" {
        light: Color::from_hex(0xD95F00),
        dark: Color::from_hex(0xFFA766),
    }

    // Status hues

    red_100: Color = "Red100" {
        light: Color::from_hex(0xFDECEC),
        dark: Color::from_hex(0x3B1414),
    }
    red_500: Color = "Red500" {
        light: Color::from_hex(0xE5322D),
        dark: Color::from_hex(0xFF5A52),
    }
    red_700: Color = "Red700" {
        light: Color::from_hex(0xB71F1A),
        dark: Color::from_hex(0xFF8A84),
    }
    green_100: Color = "Green100" {
        light: Color::from_hex(0xE8F6EC),
        dark: Color::from_hex(0x0F2E1A),
    }
    green_500: Color = "Green500" {
        light: Color::from_hex(0x1F9D55),
        dark: Color::from_hex(0x34C26F),
    }
    green_700: Color = "Green700" {
        light: Color::from_hex(0x157A40),
        dark: Color::from_hex(0x6CD897),
    }
    blue_500: Color = "Blue500" {
        light: Color::from_hex(0x1A73E8),
        dark: Color::from_hex(0x4C9AFF),
    }
    blue_700: Color = "Blue700" {
        light: Color::from_hex(0x0F56B3),
        dark: Color::from_hex(0x85B8FF),
    }
    yellow_500: Color = "Yellow500" {
        light: Color::from_hex(0xF5B400),
        dark: Color::from_hex(0xFFC933),
    }

    // Radius

    radius_small: Dimension = "RadiusSmall" {
        light: Dimension::new(4.0),
        dark: Dimension::new(4.0),
    }
    radius_medium: Dimension = "RadiusMedium" {
        light: Dimension::new(8.0),
        dark: Dimension::new(8.0),
    }
    radius_large: Dimension = "RadiusLarge" {
        light: Dimension::new(12.0),
        dark: Dimension::new(12.0),
    }
    radius_extra_large: Dimension = "RadiusExtraLarge" {
        light: Dimension::new(20.0),
        dark: Dimension::new(20.0),
    }
    /// Large enough to round any control into a capsule
    radius_full: Dimension = "RadiusFull" {
        light: Dimension::new(999.0),
        dark: Dimension::new(999.0),
    }

    // Spacing, 4pt grid with a 2pt half step

    spacing_2: Dimension = "Spacing2" {
        light: Dimension::new(2.0),
        dark: Dimension::new(2.0),
    }
    spacing_4: Dimension = "Spacing4" {
        light: Dimension::new(4.0),
        dark: Dimension::new(4.0),
    }
    spacing_8: Dimension = "Spacing8" {
        light: Dimension::new(8.0),
        dark: Dimension::new(8.0),
    }
    spacing_12: Dimension = "Spacing12" {
        light: Dimension::new(12.0),
        dark: Dimension::new(12.0),
    }
    spacing_16: Dimension = "Spacing16" {
        light: Dimension::new(16.0),
        dark: Dimension::new(16.0),
    }
    spacing_24: Dimension = "Spacing24" {
        light: Dimension::new(24.0),
        dark: Dimension::new(24.0),
    }
    spacing_32: Dimension = "Spacing32" {
        light: Dimension::new(32.0),
        dark: Dimension::new(32.0),
    }

    // Border

    /// Hairline stroke
    border_width_thin: Dimension = "BorderWidthThin" {
        light: Dimension::new(0.5),
        dark: Dimension::new(0.5),
    }
    border_width_regular: Dimension = "BorderWidthRegular" {
        light: Dimension::new(1.0),
        dark: Dimension::new(1.0),
    }
    border_width_thick: Dimension = "BorderWidthThick" {
        light: Dimension::new(2.0),
        dark: Dimension::new(2.0),
    }
    /// Inset between a border and its content
    border_spacing_small: Dimension = "BorderSpacingSmall" {
        light: Dimension::new(4.0),
        dark: Dimension::new(4.0),
    }

    // Motion, in seconds

    duration_fast: Dimension = "DurationFast" {
        light: Dimension::new(0.15),
        dark: Dimension::new(0.15),
    }
    duration_regular: Dimension = "DurationRegular" {
        light: Dimension::new(0.25),
        dark: Dimension::new(0.25),
    }
    duration_slow: Dimension = "DurationSlow" {
        light: Dimension::new(0.4),
        dark: Dimension::new(0.4),
    }

    // Elevation. Dark surfaces need denser shadows to read at all.

    /// Resting surface, shadow falls below
    elevation_below_1: Shadow = "ElevationBelow1" {
        light: Shadow::new(0.0, 1.0, 2.0, 0.0, Color::BLACK.with_alpha(0.05)),
        dark: Shadow::new(0.0, 1.0, 2.0, 0.0, Color::BLACK.with_alpha(0.3)),
    }
    elevation_below_2: Shadow = "ElevationBelow2" {
        light: Shadow::new(0.0, 2.0, 6.0, 0.0, Color::BLACK.with_alpha(0.08)),
        dark: Shadow::new(0.0, 2.0, 6.0, 0.0, Color::BLACK.with_alpha(0.4)),
    }
    elevation_below_3: Shadow = "ElevationBelow3" {
        light: Shadow::new(0.0, 4.0, 12.0, 0.0, Color::BLACK.with_alpha(0.12)),
        dark: Shadow::new(0.0, 4.0, 12.0, 0.0, Color::BLACK.with_alpha(0.5)),
    }
    /// Bottom-anchored surface, shadow falls above
    elevation_above_1: Shadow = "ElevationAbove1" {
        light: Shadow::new(0.0, -1.0, 2.0, 0.0, Color::BLACK.with_alpha(0.05)),
        dark: Shadow::new(0.0, -1.0, 2.0, 0.0, Color::BLACK.with_alpha(0.3)),
    }
}
