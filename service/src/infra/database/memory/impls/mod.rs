//! [`Database`] implementations for [`Memory`].
//!
//! [`Database`]: crate::infra::Database
//! [`Memory`]: super::Memory

mod guest;
mod reservation;
mod revenue;
mod room;
