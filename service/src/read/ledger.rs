//! Ledger-wide read definitions.

use common::Money;
use derive_more::{Display, Into};

/// Revenue accumulated by a hotel through settled check-outs.
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct Revenue(pub Money);
