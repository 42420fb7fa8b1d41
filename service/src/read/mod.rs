//! Read entities definitions.

pub mod ledger;
pub mod occupancy;
