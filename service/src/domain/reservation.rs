//! [`Reservation`] definitions.

use common::{define_kind, unit, Date, DateOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{guest, room, Room};
#[cfg(doc)]
use crate::domain::Guest;

/// Binding of a single [`Guest`] to a single [`Room`] for a [`Period`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// ID of the [`Guest`] this [`Reservation`] is made for.
    pub guest_id: guest::Id,

    /// Number of the reserved [`Room`].
    pub room_number: room::Number,

    /// [`Period`] of the stay.
    pub period: Period,

    /// Number of [`Nights`] of the stay, derived once from the [`Period`].
    pub nights: Nights,

    /// Total price of the stay, derived once from the [`Nights`] and the
    /// [`room::Rate`] at the moment of booking.
    pub total: Money,

    /// [`Status`] of this [`Reservation`].
    pub status: Status,
}

impl Reservation {
    /// Creates a new [`Status::Confirmed`] [`Reservation`] of the provided
    /// [`Room`].
    ///
    /// [`None`] is returned if the total price overflows.
    #[must_use]
    pub fn confirmed(guest_id: guest::Id, room: &Room, period: Period) -> Option<Self> {
        let nights = period.nights();
        Some(Self {
            id: Id::new(),
            guest_id,
            room_number: room.number,
            period,
            nights,
            total: room.rate.per_night().checked_mul(nights.into())?,
            status: Status::Confirmed,
        })
    }

    /// Indicates whether this [`Reservation`] holds its [`Room`].
    ///
    /// Every [`Status`] except [`Status::Pending`] holds the [`Room`].
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        !matches!(self.status, Status::Pending)
    }

    /// Indicates whether this [`Reservation`] prevents its [`Room`] from
    /// being booked for the provided [`Period`].
    #[must_use]
    pub fn conflicts_with(&self, period: &Period) -> bool {
        self.is_confirmed() && self.period.overlaps(period)
    }

    /// Indicates whether this [`Reservation`] keeps its [`Room`] occupied on
    /// the provided `date`.
    #[must_use]
    pub fn occupies(&self, date: Date) -> bool {
        matches!(self.status, Status::Confirmed | Status::CheckedIn)
            && self.period.contains(date)
    }

    /// Indicates whether the [`Guest`] may check in by this [`Reservation`]
    /// on the provided `date`.
    ///
    /// The departure date is not checked, so a late arrival is still let in.
    #[must_use]
    pub fn admits(&self, date: Date) -> bool {
        matches!(self.status, Status::Confirmed | Status::CheckedIn)
            && self.period.check_in().coerce::<()>() <= date
    }

    /// Indicates whether this [`Reservation`] still awaits its check-out.
    #[must_use]
    pub fn is_unsettled(&self) -> bool {
        matches!(self.status, Status::Confirmed | Status::CheckedIn)
    }
}

/// ID of a [`Reservation`].
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

/// Date of arriving by a [`Reservation`].
pub type CheckInDate = DateOf<(Reservation, unit::Arrival)>;

/// Date of leaving by a [`Reservation`].
pub type CheckOutDate = DateOf<(Reservation, unit::Departure)>;

/// Half-open `[check_in, check_out)` range of dates of a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// [`CheckInDate`] of this [`Period`].
    check_in: CheckInDate,

    /// [`CheckOutDate`] of this [`Period`].
    check_out: CheckOutDate,

    /// [`Nights`] between the [`CheckInDate`] and the [`CheckOutDate`].
    nights: Nights,
}

impl Period {
    /// Creates a new [`Period`] if the `check_out` comes strictly after the
    /// `check_in`.
    #[must_use]
    pub fn new(check_in: CheckInDate, check_out: CheckOutDate) -> Option<Self> {
        let nights = u32::try_from(check_in.days_until(check_out))
            .ok()
            .filter(|n| *n > 0)?;
        Some(Self {
            check_in,
            check_out,
            nights: Nights(nights),
        })
    }

    /// Returns the [`CheckInDate`] of this [`Period`].
    #[must_use]
    pub const fn check_in(&self) -> CheckInDate {
        self.check_in
    }

    /// Returns the [`CheckOutDate`] of this [`Period`].
    #[must_use]
    pub const fn check_out(&self) -> CheckOutDate {
        self.check_out
    }

    /// Returns the number of [`Nights`] in this [`Period`].
    #[must_use]
    pub const fn nights(&self) -> Nights {
        self.nights
    }

    /// Indicates whether this and the `other` [`Period`]s share at least
    /// one night.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (start, end) = self.bounds();
        let (other_start, other_end) = other.bounds();
        !(end <= other_start || start >= other_end)
    }

    /// Indicates whether the provided `date` is one of the nights of this
    /// [`Period`].
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        let (start, end) = self.bounds();
        start <= date && date < end
    }

    /// Returns untyped bounds of this [`Period`].
    fn bounds(&self) -> (Date, Date) {
        (self.check_in.coerce(), self.check_out.coerce())
    }
}

/// Number of nights of a stay.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Nights(u32);

define_kind! {
    #[doc = "Status of a [`Reservation`]."]
    enum Status {
        #[doc = "Hold which is not confirmed yet and doesn't block the room."]
        Pending = 1,

        #[doc = "Confirmed booking awaiting the guest."]
        Confirmed = 2,

        #[doc = "Guest has checked in."]
        CheckedIn = 3,

        #[doc = "Guest has checked out and the stay is settled."]
        CheckedOut = 4,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Date, Money};
    use serde::{de::DeserializeOwned, Serialize};
    use time::Duration;

    use crate::domain::{guest, room, Room};

    use super::{Period, Reservation, Status};

    fn date(s: &str) -> Date {
        Date::from_str(s).unwrap()
    }

    fn period(from: &str, to: &str) -> Period {
        Period::new(date(from).coerce(), date(to).coerce()).unwrap()
    }

    fn suite() -> Room {
        Room::new(
            room::Number::from(201),
            room::Category::new("suite").unwrap(),
            room::Rate::from_str("200USD").unwrap(),
        )
    }

    #[test]
    fn period_requires_departure_after_arrival() {
        let today = date("2026-10-16");

        assert!(Period::new(today.coerce(), (today + Duration::days(1)).coerce()).is_some());
        assert!(Period::new(today.coerce(), today.coerce()).is_none());
        assert!(Period::new((today + Duration::days(2)).coerce(), today.coerce()).is_none());
    }

    #[test]
    fn period_counts_nights() {
        assert_eq!(u32::from(period("2026-10-17", "2026-10-20").nights()), 3);
        assert_eq!(u32::from(period("2026-12-30", "2027-01-02").nights()), 3);
        assert_eq!(u32::from(period("2026-10-17", "2026-10-18").nights()), 1);
    }

    #[test]
    fn periods_overlap_as_half_open_ranges() {
        let stay = period("2026-10-17", "2026-10-20");

        assert!(stay.overlaps(&period("2026-10-17", "2026-10-20")));
        assert!(stay.overlaps(&period("2026-10-19", "2026-10-25")));
        assert!(stay.overlaps(&period("2026-10-10", "2026-10-18")));
        assert!(stay.overlaps(&period("2026-10-18", "2026-10-19")));
        assert!(stay.overlaps(&period("2026-10-01", "2026-10-30")));

        // Back-to-back stays share the changeover day only.
        assert!(!stay.overlaps(&period("2026-10-20", "2026-10-22")));
        assert!(!stay.overlaps(&period("2026-10-15", "2026-10-17")));
        assert!(!stay.overlaps(&period("2026-11-01", "2026-11-02")));
    }

    #[test]
    fn period_contains_nights_only() {
        let stay = period("2026-10-17", "2026-10-20");

        assert!(!stay.contains(date("2026-10-16")));
        assert!(stay.contains(date("2026-10-17")));
        assert!(stay.contains(date("2026-10-19")));
        assert!(!stay.contains(date("2026-10-20")));
    }

    #[test]
    fn confirmed_reservation_derives_price() {
        let reservation = Reservation::confirmed(
            guest::Id::new(),
            &suite(),
            period("2026-10-17", "2026-10-20"),
        )
        .unwrap();

        assert_eq!(reservation.status, Status::Confirmed);
        assert_eq!(u32::from(reservation.nights), 3);
        assert_eq!(reservation.total, Money::from_str("600USD").unwrap());
        assert_eq!(reservation.room_number, room::Number::from(201));
    }

    #[test]
    fn pending_reservation_holds_nothing() {
        let mut reservation = Reservation::confirmed(
            guest::Id::new(),
            &suite(),
            period("2026-10-17", "2026-10-20"),
        )
        .unwrap();
        reservation.status = Status::Pending;

        assert!(!reservation.is_confirmed());
        assert!(!reservation.conflicts_with(&period("2026-10-17", "2026-10-20")));
        assert!(!reservation.occupies(date("2026-10-18")));
        assert!(!reservation.admits(date("2026-10-18")));
    }

    #[test]
    fn checked_out_reservation_keeps_its_dates_but_frees_the_room() {
        let mut reservation = Reservation::confirmed(
            guest::Id::new(),
            &suite(),
            period("2026-10-17", "2026-10-20"),
        )
        .unwrap();
        reservation.status = Status::CheckedOut;

        assert!(reservation.conflicts_with(&period("2026-10-18", "2026-10-19")));
        assert!(!reservation.occupies(date("2026-10-18")));
        assert!(!reservation.admits(date("2026-10-18")));
        assert!(!reservation.is_unsettled());
    }

    #[test]
    fn check_in_is_allowed_from_arrival_day_on() {
        let reservation = Reservation::confirmed(
            guest::Id::new(),
            &suite(),
            period("2026-10-17", "2026-10-20"),
        )
        .unwrap();

        assert!(!reservation.admits(date("2026-10-16")));
        assert!(reservation.admits(date("2026-10-17")));
        assert!(reservation.admits(date("2026-10-25")));
    }

    #[test]
    fn status_round_trips_its_code() {
        assert_eq!(Status::try_from(Status::CheckedIn.u8()), Ok(Status::CheckedIn));
        assert_eq!(Status::try_from(9), Err(9));
        assert_eq!(Status::CheckedOut.to_string(), "CHECKED_OUT");
    }

    #[test]
    fn status_is_serializable() {
        fn assert_serde<T: DeserializeOwned + Serialize>() {}

        assert_serde::<Status>();
    }
}
