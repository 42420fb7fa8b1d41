//! [`Guest`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{guest, Guest},
    infra::{
        database::{
            self,
            memory::{Memory, Storage},
        },
        Database,
    },
};

impl<S> Database<Select<By<Option<Guest>, guest::Id>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Option<Guest>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Guest>, guest::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.read(|l| l.guests.iter().find(|g| g.id == id).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Insert<Guest>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(guest): Insert<Guest>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| l.guests.push(guest))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Update<Guest>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(guest): Update<Guest>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| {
            if let Some(existing) = l.guests.iter_mut().find(|g| g.id == guest.id)
            {
                *existing = guest;
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
