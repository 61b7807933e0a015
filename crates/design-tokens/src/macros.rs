//! Declaration macro for token layers
//!
//! `design_tokens!` takes one table per layer, with a light and a dark value
//! on every row, and generates:
//!
//! - the layer trait, one accessor per token, each documented with its
//!   export name
//! - the light and dark conformances as unit structs
//! - the list of export names
//! - the by-name [`TokenProvider`](crate::TokenProvider) impls
//!
//! A row without both values does not match the grammar, so a token can't
//! be missing from one theme. A repeated accessor is a duplicate trait
//! method. A repeated export name fails the `const` assertion below.

macro_rules! design_tokens {
    (
        $(#[$trait_meta:meta])*
        pub trait $Trait:ident: $layer:ident;
        light $Light:ident;
        dark $Dark:ident;
        names $NAMES:ident;

        $(
            $(#[$token_meta:meta])*
            $method:ident: $Kind:ident = $export:literal {
                light: $light:expr,
                dark: $dark:expr $(,)?
            }
        )*
    ) => {
        $(#[$trait_meta])*
        pub trait $Trait: $crate::provider::TokenProvider {
            $(
                $(#[$token_meta])*
                #[doc = ""]
                #[doc = concat!("Exported as `", $export, "`.")]
                fn $method(&self) -> $Kind;
            )*
        }

        #[doc = concat!("Export names of every token in [`", stringify!($Trait), "`], in declaration order.")]
        pub const $NAMES: &[&str] = &[$($export),*];

        const _: () = assert!(
            $crate::macros::names_are_unique($NAMES),
            concat!("duplicate export name in ", stringify!($Trait))
        );

        design_tokens!(@conformance $Trait, $layer, Light, $Light, $NAMES; $($method: $Kind = $export => $light;)*);
        design_tokens!(@conformance $Trait, $layer, Dark, $Dark, $NAMES; $($method: $Kind = $export => $dark;)*);
    };

    (
        @conformance $Trait:ident, $layer:ident, $theme:ident, $Provider:ident, $NAMES:ident;
        $($method:ident: $Kind:ident = $export:literal => $value:expr;)*
    ) => {
        #[doc = concat!(stringify!($theme), "-theme values of [`", stringify!($Trait), "`].")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $Provider;

        impl $Trait for $Provider {
            $(
                #[inline]
                fn $method(&self) -> $Kind {
                    $value
                }
            )*
        }

        impl $crate::provider::TokenProvider for $Provider {
            fn layer(&self) -> $crate::layer::Layer {
                $crate::layer::Layer::$layer
            }

            fn theme(&self) -> $crate::layer::Theme {
                $crate::layer::Theme::$theme
            }

            fn names(&self) -> &'static [&'static str] {
                $NAMES
            }

            fn lookup(&self, name: &str) -> Option<$crate::value::TokenValue> {
                match name {
                    $($export => Some($crate::value::TokenValue::from(<Self as $Trait>::$method(self))),)*
                    _ => None,
                }
            }

            fn kind_of(&self, name: &str) -> Option<$crate::value::TokenKind> {
                match name {
                    $($export => Some($crate::value::TokenKind::$Kind),)*
                    _ => None,
                }
            }
        }
    };
}

/// Compile-time check that no export name repeats
pub(crate) const fn names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        assert!(names_are_unique(&[]));
        assert!(names_are_unique(&["Accent", "AccentPressed", "Danger"]));
        assert!(!names_are_unique(&["Accent", "Danger", "Accent"]));
    }

    #[test]
    fn test_prefix_is_not_a_duplicate() {
        assert!(names_are_unique(&["Spacing1", "Spacing12"]));
    }
}
