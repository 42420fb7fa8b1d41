//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Decimal percentage in the `[0, 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Calculates the [`Percent`] the `part` takes of the `whole`, rounded to
    /// 2 decimal places.
    ///
    /// [`Percent::ZERO`] is returned for an empty `whole`, and a `part`
    /// greater than the `whole` is clamped to it.
    #[must_use]
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = Decimal::from(part.min(whole));
        let whole = Decimal::from(whole);
        Self((part * Decimal::ONE_HUNDRED / whole).round_dp(2).normalize())
    }

    /// Returns the [`Decimal`] value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}
