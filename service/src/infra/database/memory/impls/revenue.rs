//! [`Revenue`]-related [`Database`] implementations.

use common::operations::{By, Select, Update};
use tracerr::Traced;

use crate::{
    infra::{
        database::{
            self,
            memory::{Memory, Storage},
        },
        Database,
    },
    read::ledger::Revenue,
};

impl<S> Database<Select<By<Revenue, ()>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Revenue;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Revenue, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|l| Revenue(l.revenue))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Update<Revenue>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(Revenue(revenue)): Update<Revenue>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| l.revenue = revenue)
            .await
            .map_err(tracerr::wrap!())
    }
}
