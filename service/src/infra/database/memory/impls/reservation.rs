//! [`Reservation`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{guest, room, Reservation},
    infra::{
        database::{
            self,
            memory::{Memory, Storage},
        },
        Database,
    },
};

impl<S> Database<Select<By<Vec<Reservation>, room::Number>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Reservation>, room::Number>>,
    ) -> Result<Self::Ok, Self::Err> {
        let number = by.into_inner();
        self.read(|l| {
            l.reservations
                .iter()
                .filter(|r| r.room_number == number)
                .cloned()
                .collect()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Select<By<Vec<Reservation>, guest::Id>>> for Memory<S>
where
    S: Storage,
{
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Reservation>, guest::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.read(|l| {
            // History order is the one kept by the `Guest` itself.
            l.guests
                .iter()
                .find(|g| g.id == id)
                .into_iter()
                .flat_map(|g| g.reservations.iter())
                .filter_map(|rid| l.reservations.iter().find(|r| r.id == *rid))
                .cloned()
                .collect()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Insert<Reservation>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(reservation): Insert<Reservation>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| l.reservations.push(reservation))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<S> Database<Update<Reservation>> for Memory<S>
where
    S: Storage,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(reservation): Update<Reservation>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|l| {
            if let Some(existing) =
                l.reservations.iter_mut().find(|r| r.id == reservation.id)
            {
                *existing = reservation;
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
