//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// A kind enum is a plain `#[repr(u8)]` enumeration which is displayed and
/// parsed in `SCREAMING_SNAKE_CASE`.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!(Kind::Sphere.to_string(), "SPHERE");
/// assert_eq!("CUBE".parse::<Kind>().unwrap(), Kind::Cube);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $crate::with_serde_kind! {
            #[derive(
                Clone,
                Copy,
                Debug,
                $crate::private::strum::Display,
                $crate::private::strum::EnumString,
                Eq,
                Hash,
                PartialEq,
            )]
            #[doc = $doc]
            #[repr(u8)]
            #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
            pub enum $name {
                $(
                     #[doc = $variant_doc]
                     $variant = $value,
                )*
            }
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        v if Self::$variant.u8() == v => Ok(Self::$variant),
                    )*
                    v => Err(v),
                }
            }
        }
    };
}

/// Adds [`serde`] derives to a kind enum, if this crate's `serde` feature is
/// enabled.
///
/// The feature is checked here, so a kind enum defined in any crate is
/// (de)serializable whenever `common/serde` is on.
///
/// [`serde`]: https://docs.rs/serde
#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! with_serde_kind {
    ($item:item) => {
        #[derive(
            $crate::private::serde::Deserialize,
            $crate::private::serde::Serialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        $item
    };
}

/// Adds [`serde`] derives to a kind enum, if this crate's `serde` feature is
/// enabled.
///
/// [`serde`]: https://docs.rs/serde
#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! with_serde_kind {
    ($item:item) => {
        $item
    };
}
