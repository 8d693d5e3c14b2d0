//! Macros for declaring simple states.

/// Declare a fieldless enum and implement `State` for it.
///
/// Extra attributes (derives, docs, `#[default]`) pass through to the enum
/// and its variants.
///
/// # Example
///
/// ```
/// use statecraft::core::State;
/// use statecraft::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Season {
///         Spring,
///         Summer,
///         Autumn,
///         Winter,
///     }
/// }
///
/// assert_eq!(Season::Autumn.name(), "Autumn");
/// assert!(!Season::Winter.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
