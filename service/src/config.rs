//! [`Config`]-related definitions.

#[cfg(doc)]
use crate::{command::CheckOut, Service};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`Settlement`] policy of the [`CheckOut`] command.
    pub settlement: Settlement,
}

/// Policy of settling a stay on [`CheckOut`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Settlement {
    /// Every stay is settled exactly once: a checked-out reservation is
    /// terminal and is never billed again.
    #[default]
    Once,

    /// Legacy behaviour: the first confirmed reservation of a room is billed
    /// on every check-out, even if it was already settled.
    ///
    /// Repeated settlements are reported, but still added to the revenue.
    Repeated,
}
