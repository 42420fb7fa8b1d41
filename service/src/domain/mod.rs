//! Domain definitions.

pub mod guest;
pub mod reservation;
pub mod room;

pub use self::{guest::Guest, reservation::Reservation, room::Room};
