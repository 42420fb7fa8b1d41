//! Calendar date utilities.

use std::{cmp::Ordering, fmt, hash, marker::PhantomData, ops, str::FromStr};

use derive_more::{Display, Error};
use time::{format_description::well_known::Iso8601, Duration};

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without a time of day.
///
/// The `Of` parameter tags what the date means (an arrival, a departure and so on)
/// so that dates of different meaning cannot be mixed up accidentally.
#[derive(derive_more::Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] representing the current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        Some(Self {
            inner: time::Date::from_calendar_date(year, month, day).ok()?,
            _of: PhantomData,
        })
    }

    /// Returns this [`Date`] moved forward by the provided number of days.
    ///
    /// [`None`] is returned if the result is out of the supported range.
    #[must_use]
    pub fn checked_add_days(self, days: u32) -> Option<Self> {
        Some(Self {
            inner: self.inner.checked_add(Duration::days(i64::from(days)))?,
            _of: PhantomData,
        })
    }

    /// Returns the number of whole days from this [`Date`] until the
    /// `other` one.
    ///
    /// The result is negative if `other` comes before this [`Date`].
    #[must_use]
    pub fn days_until<Other: ?Sized>(self, other: DateOf<Other>) -> i64 {
        (other.inner - self.inner).whole_days()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, &Iso8601::DATE)
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
            .map_err(ParseError)
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            u8::from(self.inner.month()),
            self.inner.day(),
        )
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> hash::Hash for DateOf<Of> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> ops::Add<Duration> for DateOf<Of> {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self {
            inner: self.inner + rhs,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> ops::Sub<Duration> for DateOf<Of> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self {
            inner: self.inner - rhs,
            _of: PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::DateOf;

    impl<Of: ?Sized> Serialize for DateOf<Of> {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de, Of: ?Sized> Deserialize<'de> for DateOf<Of> {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let s = String::deserialize(d)?;
            Self::from_str(&s).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use time::Duration;

    use super::Date;

    fn date(s: &str) -> Date {
        Date::from_str(s).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(date("2026-10-16"), Date::from_calendar(2026, 10, 16).unwrap());
        assert_eq!(date("2024-02-29"), Date::from_calendar(2024, 2, 29).unwrap());

        assert!(Date::from_str("2026-13-01").is_err());
        assert!(Date::from_str("2025-02-29").is_err());
        assert!(Date::from_str("16.10.2026").is_err());
        assert!(Date::from_str("").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(date("2026-01-05").to_string(), "2026-01-05");
        assert_eq!(Date::from_calendar(987, 3, 9).unwrap().to_string(), "0987-03-09");
    }

    #[test]
    fn counts_days_across_months() {
        assert_eq!(date("2026-10-30").days_until(date("2026-11-02")), 3);
        assert_eq!(date("2026-11-02").days_until(date("2026-10-30")), -3);
        assert_eq!(date("2026-10-30").days_until(date("2026-10-30")), 0);
    }

    #[test]
    fn shifts_by_days() {
        assert_eq!(date("2026-12-31") + Duration::days(1), date("2027-01-01"));
        assert_eq!(date("2026-03-01") - Duration::days(1), date("2026-02-28"));
        assert_eq!(
            date("2026-10-16").checked_add_days(3),
            Some(date("2026-10-19")),
        );
    }

    #[test]
    fn orders_chronologically() {
        assert!(date("2026-10-16") < date("2026-10-17"));
        assert!(date("2027-01-01") > date("2026-12-31"));
    }
}
