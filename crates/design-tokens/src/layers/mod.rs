//! The three token layers, each declared once for both themes

pub mod component;
pub mod core;
pub mod semantic;

pub use self::component::{ComponentDark, ComponentLight, ComponentTokens, COMPONENT_TOKEN_NAMES};
pub use self::core::{CoreDark, CoreLight, CoreTokens, CORE_TOKEN_NAMES};
pub use self::semantic::{SemanticDark, SemanticLight, SemanticTokens, SEMANTIC_TOKEN_NAMES};
