//! [`Query`] of [`Reservation`] lists.

use common::operations::By;

use crate::domain::{guest, room, Reservation};
#[cfg(doc)]
use crate::{domain::Guest, query::Query};

use super::DatabaseQuery;

/// [`Query`] of the [`Reservation`] history of a [`Guest`], in booking order.
pub type ByGuest = DatabaseQuery<By<Vec<Reservation>, guest::Id>>;

/// [`Query`] of all the [`Reservation`]s of a single room, in booking order.
pub type ByRoom = DatabaseQuery<By<Vec<Reservation>, room::Number>>;
