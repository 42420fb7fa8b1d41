//! [`Command`] for booking a [`Room`].

use common::operations::{
    By, Commit, Insert, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{guest, reservation::Period, room, Guest, Reservation, Room},
    infra::{database, Database},
    query::available_rooms,
    Service,
};

use super::Command;

/// [`Command`] for booking a [`Room`] by a [`Guest`] for a [`Period`].
#[derive(Clone, Copy, Debug)]
pub struct BookRoom {
    /// ID of the [`Guest`] making the booking.
    pub guest_id: guest::Id,

    /// [`room::Number`] of the [`Room`] to book.
    pub room_number: room::Number,

    /// [`Period`] of the stay.
    pub period: Period,
}

impl<Db> Command<BookRoom> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Guest>, guest::Id>>,
            Ok = Option<Guest>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Room>, room::Number>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Room>, Option<room::Category>>>,
            Ok = Vec<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Reservation>, room::Number>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        > + Database<Insert<Reservation>, Err = Traced<database::Error>>
        + Database<Update<Guest>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: BookRoom) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let BookRoom {
            guest_id,
            room_number,
            period,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut guest = tx
            .execute(Select(By::<Option<Guest>, _>::new(guest_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::GuestNotFound(guest_id)))?;

        let room = tx
            .execute(Select(By::<Option<Room>, _>::new(room_number)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::RoomNotFound(room_number)))?;

        let available = available_rooms::select(&tx, &period, None)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !available.iter().any(|r| r.number == room_number) {
            return Err(tracerr::new!(E::RoomUnavailable(room_number)));
        }

        let reservation = Reservation::confirmed(guest.id, &room, period)
            .ok_or_else(|| tracerr::new!(E::PriceOverflow))?;
        guest.reservations.push(reservation.id);

        tx.execute(Insert(reservation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Update(guest.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "reservation for {}: room {} ({}) from {} to {}, {} nights, \
             total {}",
            guest.name,
            room.number,
            room.category,
            period.check_in(),
            period.check_out(),
            reservation.nights,
            reservation.total,
        );

        Ok(reservation)
    }
}

/// Error of [`BookRoom`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Guest`] with the provided ID doesn't exist.
    #[display("`Guest(id: {_0})` doesn't exist")]
    GuestNotFound(#[error(not(source))] guest::Id),

    /// Total price of the stay doesn't fit into a [`common::Money`] amount.
    #[display("total price of the stay overflows")]
    PriceOverflow,

    /// [`Room`] with the provided [`room::Number`] doesn't exist.
    #[display("`Room(number: {_0})` doesn't exist")]
    RoomNotFound(#[error(not(source))] room::Number),

    /// [`Room`] is under maintenance or already booked for an overlapping
    /// [`Period`].
    #[display("`Room(number: {_0})` is unavailable for the requested dates")]
    RoomUnavailable(#[error(not(source))] room::Number),
}
