//! Theme resolver
//!
//! Maps a (layer, theme) selection to one of the six static providers. The
//! typed entry point is [`resolve`]; [`resolve_dyn`] serves by-name tooling
//! and [`Tokens`] bundles all three layers for one theme.
//!
//! ```rust
//! use design_tokens::{resolve, CoreLayer, Theme};
//!
//! let shadow = resolve::<CoreLayer>(Theme::Light).elevation_below_1();
//! assert_eq!(shadow.blur_radius, 2.0);
//! ```

use crate::layer::{Layer, Theme};
use crate::layers::{
    ComponentDark, ComponentLight, ComponentTokens, CoreDark, CoreLight, CoreTokens,
    SemanticDark, SemanticLight, SemanticTokens,
};
use crate::provider::TokenProvider;

static CORE_LIGHT: CoreLight = CoreLight;
static CORE_DARK: CoreDark = CoreDark;
static SEMANTIC_LIGHT: SemanticLight = SemanticLight;
static SEMANTIC_DARK: SemanticDark = SemanticDark;
static COMPONENT_LIGHT: ComponentLight = ComponentLight;
static COMPONENT_DARK: ComponentDark = ComponentDark;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::CoreLayer {}
    impl Sealed for super::SemanticLayer {}
    impl Sealed for super::ComponentLayer {}
}

/// Type-level layer selector
///
/// Implemented only by [`CoreLayer`], [`SemanticLayer`] and
/// [`ComponentLayer`], so a fourth layer can't be requested.
pub trait TokenLayer: sealed::Sealed {
    /// Runtime tag for this layer
    const LAYER: Layer;

    /// Provider interface of this layer
    type Provider: ?Sized + TokenProvider + 'static;

    /// Static provider for the theme
    fn provider(theme: Theme) -> &'static Self::Provider;
}

/// Selects the Core layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreLayer {}

/// Selects the Semantic layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticLayer {}

/// Selects the Component layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentLayer {}

impl TokenLayer for CoreLayer {
    const LAYER: Layer = Layer::Core;
    type Provider = dyn CoreTokens;

    fn provider(theme: Theme) -> &'static Self::Provider {
        match theme {
            Theme::Light => &CORE_LIGHT,
            Theme::Dark => &CORE_DARK,
        }
    }
}

impl TokenLayer for SemanticLayer {
    const LAYER: Layer = Layer::Semantic;
    type Provider = dyn SemanticTokens;

    fn provider(theme: Theme) -> &'static Self::Provider {
        match theme {
            Theme::Light => &SEMANTIC_LIGHT,
            Theme::Dark => &SEMANTIC_DARK,
        }
    }
}

impl TokenLayer for ComponentLayer {
    const LAYER: Layer = Layer::Component;
    type Provider = dyn ComponentTokens;

    fn provider(theme: Theme) -> &'static Self::Provider {
        match theme {
            Theme::Light => &COMPONENT_LIGHT,
            Theme::Dark => &COMPONENT_DARK,
        }
    }
}

/// Resolve the provider for layer `L` under `theme`
pub fn resolve<L: TokenLayer>(theme: Theme) -> &'static L::Provider {
    L::provider(theme)
}

/// Resolve a provider from runtime selectors, for by-name access
pub fn resolve_dyn(layer: Layer, theme: Theme) -> &'static dyn TokenProvider {
    match (layer, theme) {
        (Layer::Core, Theme::Light) => &CORE_LIGHT,
        (Layer::Core, Theme::Dark) => &CORE_DARK,
        (Layer::Semantic, Theme::Light) => &SEMANTIC_LIGHT,
        (Layer::Semantic, Theme::Dark) => &SEMANTIC_DARK,
        (Layer::Component, Theme::Light) => &COMPONENT_LIGHT,
        (Layer::Component, Theme::Dark) => &COMPONENT_DARK,
    }
}

/// All three layers resolved for a single theme
#[derive(Debug, Clone, Copy)]
pub struct Tokens {
    theme: Theme,
    core: &'static dyn CoreTokens,
    semantic: &'static dyn SemanticTokens,
    component: &'static dyn ComponentTokens,
}

impl Tokens {
    /// Resolve every layer for `theme`
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme,
            core: resolve::<CoreLayer>(theme),
            semantic: resolve::<SemanticLayer>(theme),
            component: resolve::<ComponentLayer>(theme),
        }
    }

    /// Theme these tokens were resolved for
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Core layer provider
    pub fn core(&self) -> &'static dyn CoreTokens {
        self.core
    }

    /// Semantic layer provider
    pub fn semantic(&self) -> &'static dyn SemanticTokens {
        self.semantic
    }

    /// Component layer provider
    pub fn component(&self) -> &'static dyn ComponentTokens {
        self.component
    }

    /// By-name provider for one of the three layers
    pub fn layer(&self, layer: Layer) -> &'static dyn TokenProvider {
        resolve_dyn(layer, self.theme)
    }
}

impl PartialEq for Tokens {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme
    }
}

impl Eq for Tokens {}
