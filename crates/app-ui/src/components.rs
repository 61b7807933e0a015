//! Storefront UI components
//!
//! Components are plain structs with serializable props. Each one computes
//! its styles from a resolved [`Tokens`] bundle, reading only the Component
//! layer (and Semantic where no component token exists). Nothing here
//! branches on the theme; swapping the bundle is the whole theme switch.
//!
//! # Available Components
//!
//! - [`Button`] - Primary and secondary actions
//! - [`Card`] - Elevated content container
//! - [`ProductTile`] - Product card with price
//! - [`Badge`] - Sale and new labels
//! - [`TabBar`] - Bottom navigation bar
//! - [`Sheet`] - Modal bottom sheet
//! - [`TextField`] - Text input with validation state

use std::time::Duration;

use design_tokens::{Color, Dimension, Shadow, Tokens};
use serde::{Deserialize, Serialize};

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid accent fill
    #[default]
    Primary,
    /// Neutral fill
    Secondary,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Accessible label
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Icon name, drawn before the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Button {
    /// Create a primary button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            icon: None,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set a leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Get the computed styles for this button
    pub fn computed_styles(&self, tokens: &Tokens) -> ButtonStyles {
        let component = tokens.component();

        let (background, background_pressed, label_color, icon_color) =
            match (self.variant, self.disabled) {
                (_, true) => (
                    component.button_disabled_fill(),
                    component.button_disabled_fill(),
                    component.button_disabled_label(),
                    component.button_disabled_label(),
                ),
                (ButtonVariant::Primary, false) => (
                    component.button_primary_fill(),
                    component.button_primary_fill_pressed(),
                    component.button_primary_label(),
                    component.icon_on_orange_fill(),
                ),
                (ButtonVariant::Secondary, false) => (
                    component.button_secondary_fill(),
                    tokens.semantic().background_tertiary(),
                    component.button_secondary_label(),
                    component.button_secondary_label(),
                ),
            };

        ButtonStyles {
            background,
            background_pressed,
            label_color,
            icon_color,
            height: component.button_height(),
            padding_horizontal: component.button_padding_horizontal(),
            border_radius: component.button_corner_radius(),
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Background color while pressed
    pub background_pressed: Color,
    /// Label color
    pub label_color: Color,
    /// Icon color
    pub icon_color: Color,
    /// Fixed height
    pub height: Dimension,
    /// Horizontal padding
    pub padding_horizontal: Dimension,
    /// Border radius
    pub border_radius: Dimension,
}

// =============================================================================
// Card Component
// =============================================================================

/// Card container properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Card {
    /// Draw the hairline border
    #[serde(default)]
    pub bordered: bool,
    /// Lift the card with a shadow
    #[serde(default)]
    pub elevated: bool,
}

impl Card {
    /// Create a flat, borderless card
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a border
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    /// Add a shadow
    pub fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }

    /// Get the computed styles for this card
    pub fn computed_styles(&self, tokens: &Tokens) -> CardStyles {
        let component = tokens.component();

        CardStyles {
            background: component.card_background(),
            border_color: self.bordered.then(|| component.card_border()),
            border_width: if self.bordered {
                tokens.semantic().divider_width()
            } else {
                Dimension::ZERO
            },
            border_radius: component.card_corner_radius(),
            padding: component.card_padding(),
            shadow: if self.elevated {
                component.card_shadow()
            } else {
                Shadow::NONE
            },
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: Dimension,
    /// Border radius
    pub border_radius: Dimension,
    /// Inner padding
    pub padding: Dimension,
    /// Drop shadow
    pub shadow: Shadow,
}

// =============================================================================
// Product Tile Component
// =============================================================================

/// Product tile properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTile {
    /// Product title
    pub title: String,
    /// Display price
    pub price: String,
    /// Price before the discount, if on sale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    /// Show the "new" badge
    #[serde(default)]
    pub is_new: bool,
}

impl ProductTile {
    /// Create a tile at full price
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            original_price: None,
            is_new: false,
        }
    }

    /// Mark the product as discounted
    pub fn on_sale(mut self, original_price: impl Into<String>) -> Self {
        self.original_price = Some(original_price.into());
        self
    }

    /// Mark the product as new
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Whether the product is discounted
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Badge to show on the tile; a sale wins over "new"
    pub fn badge(&self) -> Option<Badge> {
        if self.is_on_sale() {
            Some(Badge::new(BadgeKind::Sale))
        } else if self.is_new {
            Some(Badge::new(BadgeKind::New))
        } else {
            None
        }
    }

    /// Get the computed styles for this tile
    pub fn computed_styles(&self, tokens: &Tokens) -> ProductTileStyles {
        let component = tokens.component();

        ProductTileStyles {
            card: Card::new().elevated().computed_styles(tokens),
            image_background: component.product_tile_image_background(),
            title_color: tokens.semantic().text_primary(),
            price_color: if self.is_on_sale() {
                component.product_tile_sale_price_text()
            } else {
                component.product_tile_price_text()
            },
            original_price_color: tokens.semantic().text_tertiary(),
            badge: self.badge().map(|badge| badge.computed_styles(tokens)),
        }
    }
}

/// Computed product tile styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductTileStyles {
    /// Enclosing card
    pub card: CardStyles,
    /// Placeholder behind the product image
    pub image_background: Color,
    /// Title color
    pub title_color: Color,
    /// Current price color
    pub price_color: Color,
    /// Struck-through original price color
    pub original_price_color: Color,
    /// Badge styles, if a badge is shown
    pub badge: Option<BadgeStyles>,
}

// =============================================================================
// Badge Component
// =============================================================================

/// Badge kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Discounted product
    Sale,
    /// Recently added product
    New,
}

impl BadgeKind {
    /// Default badge text
    pub fn label(&self) -> &'static str {
        match self {
            BadgeKind::Sale => "SALE",
            BadgeKind::New => "NEW",
        }
    }
}

/// Badge properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge kind
    pub kind: BadgeKind,
}

impl Badge {
    /// Create a badge
    pub fn new(kind: BadgeKind) -> Self {
        Self { kind }
    }

    /// Get the computed styles for this badge
    pub fn computed_styles(&self, tokens: &Tokens) -> BadgeStyles {
        let component = tokens.component();

        BadgeStyles {
            background: match self.kind {
                BadgeKind::Sale => component.badge_sale_fill(),
                BadgeKind::New => component.badge_new_fill(),
            },
            label_color: component.badge_label(),
            border_radius: component.badge_corner_radius(),
        }
    }
}

/// Computed badge styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeStyles {
    /// Fill color
    pub background: Color,
    /// Label color
    pub label_color: Color,
    /// Border radius
    pub border_radius: Dimension,
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// Bottom tab bar properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBar {
    /// Tab titles in display order
    pub items: Vec<String>,
    /// Index of the selected tab
    pub selected: usize,
}

impl TabBar {
    /// Create a tab bar with the first tab selected
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    /// Select a tab; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Get the computed styles for this tab bar
    pub fn computed_styles(&self, tokens: &Tokens) -> TabBarStyles {
        let component = tokens.component();

        TabBarStyles {
            background: component.tab_bar_background(),
            item_colors: (0..self.items.len())
                .map(|index| {
                    if index == self.selected {
                        component.tab_bar_item_active()
                    } else {
                        component.tab_bar_item_inactive()
                    }
                })
                .collect(),
            divider_width: component.tab_bar_divider_width(),
            divider_color: tokens.semantic().border_subtle(),
            height: component.tab_bar_height(),
            shadow: component.tab_bar_shadow(),
        }
    }
}

/// Computed tab bar styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarStyles {
    /// Bar background
    pub background: Color,
    /// Tint per item, in item order
    pub item_colors: Vec<Color>,
    /// Top divider width
    pub divider_width: Dimension,
    /// Top divider color
    pub divider_color: Color,
    /// Bar height
    pub height: Dimension,
    /// Shadow cast upward onto content
    pub shadow: Shadow,
}

// =============================================================================
// Sheet Component
// =============================================================================

/// Modal bottom sheet properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Dim the content behind the sheet
    #[serde(default = "default_true")]
    pub dims_background: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a sheet over a dimmed background
    pub fn new() -> Self {
        Self {
            dims_background: true,
        }
    }

    /// Get the computed styles for this sheet
    pub fn computed_styles(&self, tokens: &Tokens) -> SheetStyles {
        let component = tokens.component();

        SheetStyles {
            background: component.sheet_background(),
            scrim: if self.dims_background {
                component.sheet_scrim()
            } else {
                Color::CLEAR
            },
            border_radius: component.sheet_corner_radius(),
            shadow: component.sheet_shadow(),
            present_duration: component.sheet_present_duration().as_duration(),
        }
    }
}

/// Computed sheet styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyles {
    /// Sheet surface color
    pub background: Color,
    /// Color drawn over the content behind the sheet
    pub scrim: Color,
    /// Top corner radius
    pub border_radius: Dimension,
    /// Drop shadow
    pub shadow: Shadow,
    /// Presentation animation length
    pub present_duration: Duration,
}

// =============================================================================
// Text Field Component
// =============================================================================

/// Input validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    /// No validation result
    #[default]
    None,
    /// Value was rejected
    Error,
}

/// Text field properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    /// Placeholder text
    pub placeholder: String,
    /// Whether the field has keyboard focus
    #[serde(default)]
    pub focused: bool,
    /// Validation state
    #[serde(default)]
    pub validation: ValidationState,
}

impl TextField {
    /// Create an unfocused field
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            focused: false,
            validation: ValidationState::None,
        }
    }

    /// Set focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set validation state
    pub fn with_validation(mut self, validation: ValidationState) -> Self {
        self.validation = validation;
        self
    }

    /// Get the computed styles for this field
    ///
    /// An error border takes precedence over the focus border; focus still
    /// widens the stroke.
    pub fn computed_styles(&self, tokens: &Tokens) -> TextFieldStyles {
        let component = tokens.component();

        let border_color = match (self.validation, self.focused) {
            (ValidationState::Error, _) => component.text_field_border_error(),
            (ValidationState::None, true) => component.text_field_border_focused(),
            (ValidationState::None, false) => component.text_field_border(),
        };

        TextFieldStyles {
            background: tokens.semantic().background_primary(),
            text_color: tokens.semantic().text_primary(),
            placeholder_color: component.text_field_placeholder(),
            border_color,
            border_width: if self.focused {
                component.text_field_border_width_focused()
            } else {
                component.text_field_border_width()
            },
            border_radius: tokens.semantic().corner_radius_control(),
        }
    }
}

/// Computed text field styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextFieldStyles {
    /// Background color
    pub background: Color,
    /// Input text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: Dimension,
    /// Border radius
    pub border_radius: Dimension,
}
