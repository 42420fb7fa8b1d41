//! [`Guest`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::reservation;
#[cfg(doc)]
use crate::domain::Reservation;

/// Hotel guest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Guest {
    /// ID of this [`Guest`].
    pub id: Id,

    /// [`Name`] of this [`Guest`].
    pub name: Name,

    /// [`Email`] of this [`Guest`].
    pub email: Email,

    /// [`Phone`] of this [`Guest`].
    pub phone: Phone,

    /// IDs of the [`Reservation`]s made by this [`Guest`], in booking order.
    pub reservations: Vec<reservation::Id>,
}

/// ID of a [`Guest`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Defines a trimmed non-empty string of a [`Guest`] contact detail.
macro_rules! define_contact {
    ($(#[doc = $doc:literal])* $name:ident, max = $max:literal) => {
        $(#[doc = $doc])*
        #[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name), "`].",
            )]
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value && !value.is_empty() && value.len() <= $max
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

define_contact! {
    /// Full name of a [`Guest`].
    Name, max = 512
}

define_contact! {
    /// Email of a [`Guest`].
    ///
    /// Only the shape of the string is checked, not the address itself.
    Email, max = 254
}

define_contact! {
    /// Phone number of a [`Guest`], as written by the guest.
    Phone, max = 32
}
