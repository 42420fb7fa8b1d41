//! [`Query`] of a single [`Guest`].

use common::operations::By;

use crate::domain::{guest, Guest};
#[cfg(doc)]
use crate::query::Query;

use super::DatabaseQuery;

/// [`Query`] of a single [`Guest`] by its [`guest::Id`].
pub type ById = DatabaseQuery<By<Option<Guest>, guest::Id>>;
