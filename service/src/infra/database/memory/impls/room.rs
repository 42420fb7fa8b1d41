//! [`Room`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{room, Room},
    infra::{
        database::{
            self,
            memory::{Memory, Storage},
        },
        Database,
    },
};

impl<S> Database<Select<By<Option<Room>, room::Number>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Number>>,
    ) -> Result<Self::Ok, Self::Err> {
        let number = by.into_inner();
        self.read(|l| l.rooms.iter().find(|r| r.number == number).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Select<By<Vec<Room>, Option<room::Category>>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, Option<room::Category>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let category = by.into_inner();
        self.read(|l| {
            l.rooms
                .iter()
                .filter(|r| category.as_ref().is_none_or(|c| r.category == *c))
                .cloned()
                .collect()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Insert<Room>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(room): Insert<Room>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| l.rooms.push(room))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Update<Room>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(room): Update<Room>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| {
            if let Some(existing) =
                l.rooms.iter_mut().find(|r| r.number == room.number)
            {
                *existing = room;
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
