//! [`Query`] of the accumulated [`Revenue`].

use common::operations::By;

use crate::read::ledger::Revenue;
#[cfg(doc)]
use crate::query::Query;

use super::DatabaseQuery;

/// [`Query`] of the [`Revenue`] accumulated by check-outs.
pub type Total = DatabaseQuery<By<Revenue, ()>>;
