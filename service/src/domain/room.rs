//! [`Room`] definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bookable hotel room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    /// [`Number`] of this [`Room`], unique in a hotel.
    pub number: Number,

    /// [`Category`] of this [`Room`].
    pub category: Category,

    /// Nightly [`Rate`] of this [`Room`].
    pub rate: Rate,

    /// Indicator whether this [`Room`] is offered for booking at all.
    ///
    /// Availability for concrete dates is always derived from reservations.
    pub is_available: bool,

    /// Indicator whether this [`Room`] is under maintenance and cannot be
    /// booked or occupied.
    pub under_maintenance: bool,
}

impl Room {
    /// Creates a new [`Room`] ready to be booked.
    #[must_use]
    pub fn new(number: Number, category: Category, rate: Rate) -> Self {
        Self {
            number,
            category,
            rate,
            is_available: true,
            under_maintenance: false,
        }
    }
}

/// Number of a [`Room`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Number(u32);

/// Category of a [`Room`] (`single`, `double`, `suite` and alike).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Category(String);

impl Category {
    /// Creates a new [`Category`] if the given `category` is valid.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        Self::check(&category).then_some(Self(category))
    }

    /// Checks whether the given `category` is a valid [`Category`].
    fn check(category: impl AsRef<str>) -> bool {
        let category = category.as_ref();
        category.trim() == category
            && !category.is_empty()
            && category.len() <= 64
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}

/// Nightly rate of a [`Room`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct Rate(Money);

impl Rate {
    /// Creates a new [`Rate`] if the given `price` is not negative.
    #[must_use]
    pub fn new(price: Money) -> Option<Self> {
        (price.amount >= Decimal::ZERO).then_some(Self(price))
    }

    /// Returns the price of a single night.
    #[must_use]
    pub const fn per_night(self) -> Money {
        self.0
    }
}

impl FromStr for Rate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Money::from_str(s)?).ok_or("negative `Rate`")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Category, Number, Rate, Room};

    #[test]
    fn category_rejects_blank_and_padded_labels() {
        assert!(Category::new("suite").is_some());
        assert!(Category::new("family room").is_some());

        assert!(Category::new("").is_none());
        assert!(Category::new(" single").is_none());
        assert!(Category::new("double ").is_none());
        assert!(Category::new("x".repeat(65)).is_none());
    }

    #[test]
    fn rate_is_never_negative() {
        assert!(Rate::from_str("80USD").is_ok());
        assert!(Rate::from_str("0USD").is_ok());
        assert_eq!(Rate::from_str("-1USD"), Err("negative `Rate`"));
        assert!(Rate::from_str("eighty").is_err());
    }

    #[test]
    fn new_room_is_bookable() {
        let room = Room::new(
            Number::from(101),
            Category::new("single").unwrap(),
            Rate::from_str("80USD").unwrap(),
        );

        assert!(room.is_available);
        assert!(!room.under_maintenance);
        assert_eq!(room.number.to_string(), "101");
        assert_eq!(room.rate.to_string(), "80USD");
    }
}
