//! [`Command`] definition.

pub mod add_room;
pub mod book_room;
pub mod check_in;
pub mod check_out;
pub mod register_guest;
pub mod set_room_maintenance;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_room::AddRoom, book_room::BookRoom, check_in::CheckIn,
    check_out::CheckOut, register_guest::RegisterGuest,
    set_room_maintenance::SetRoomMaintenance,
};
