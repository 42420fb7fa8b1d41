//! Occupancy read definitions.

use common::{Date, Money, Percent};

#[cfg(doc)]
use crate::domain::Room;

/// Snapshot of a hotel occupancy on some [`Date`].
///
/// Every [`Room`] is counted exactly once: as under maintenance, occupied or
/// available, so `occupied + available + under_maintenance == total`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    /// [`Date`] this [`Report`] is made for.
    pub date: Date,

    /// Total number of [`Room`]s.
    pub total: usize,

    /// Number of [`Room`]s occupied on the [`Report::date`].
    pub occupied: usize,

    /// Number of [`Room`]s free on the [`Report::date`].
    pub available: usize,

    /// Number of [`Room`]s under maintenance.
    pub under_maintenance: usize,

    /// Share of occupied [`Room`]s among all of them.
    pub occupancy: Percent,

    /// Revenue accumulated so far.
    pub revenue: Money,
}
