//! [`Room`]-related [`Query`]s.

use common::operations::By;

use crate::domain::{room, Room};
#[cfg(doc)]
use crate::query::Query;

use super::DatabaseQuery;

/// [`Query`] of a single [`Room`] by its [`room::Number`].
pub type ByNumber = DatabaseQuery<By<Option<Room>, room::Number>>;

/// [`Query`] of all the [`Room`]s, optionally of a single [`room::Category`]
/// only.
pub type List = DatabaseQuery<By<Vec<Room>, Option<room::Category>>>;
