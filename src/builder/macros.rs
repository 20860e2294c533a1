//! Macros for declaring state enums.

/// Declare a unit-variant enum that implements [`State`](crate::core::State).
///
/// The generated enum is `Copy`, hashable and serializable, displays as its
/// variant name, and lists its variants in `ALL` (handy for walking guard
/// tables in tests). An optional `final:` list marks terminal variants.
///
/// # Example
///
/// ```
/// use effect_reducer::core::State;
/// use effect_reducer::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Drafting,
///         Sending,
///         Sent,
///     }
///     final: [Sent]
/// }
///
/// assert_eq!(Phase::ALL, &[Phase::Drafting, Phase::Sending, Phase::Sent]);
/// assert_eq!(Phase::Sending.name(), "Sending");
/// assert_eq!(Phase::Sent.to_string(), "Sent");
/// assert!(Phase::Sent.is_final());
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
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
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
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
