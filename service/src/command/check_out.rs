//! [`Command`] for checking a [`Guest`] out.

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    config,
    domain::{reservation::Status, room, Reservation},
    infra::{database, Database},
    read::ledger::Revenue,
    Service,
};
#[cfg(doc)]
use crate::domain::{Guest, Room};

use super::Command;

/// [`Command`] for checking a [`Guest`] out of a [`Room`] and settling the
/// stay.
///
/// The settled [`Reservation`] is the first one of the [`Room`] in booking
/// order, not the one currently checked in. Dates are not considered, so an
/// earlier booking of a later stay is settled first.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut {
    /// [`room::Number`] of the [`Room`] to check out of.
    pub room_number: room::Number,
}

/// Settled stay, returned by a [`CheckOut`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    /// Settled [`Reservation`].
    pub reservation: Reservation,

    /// Amount added to the [`Revenue`].
    pub invoice: Money,

    /// Indicator whether the [`Reservation`] was already settled before.
    ///
    /// Only possible under [`config::Settlement::Repeated`].
    pub repeated: bool,
}

impl<Db> Command<CheckOut> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Vec<Reservation>, room::Number>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Revenue, ()>>,
            Ok = Revenue,
            Err = Traced<database::Error>,
        > + Database<Update<Reservation>, Err = Traced<database::Error>>
        + Database<Update<Revenue>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Settlement;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CheckOut) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CheckOut { room_number } = cmd;
        let policy = self.config().settlement;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut reservation = tx
            .execute(Select(By::<Vec<Reservation>, _>::new(room_number)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .into_iter()
            .find(|r| match policy {
                config::Settlement::Once => r.is_unsettled(),
                config::Settlement::Repeated => r.is_confirmed(),
            })
            .ok_or_else(|| tracerr::new!(E::NoReservationFound(room_number)))?;
        let repeated = reservation.status == Status::CheckedOut;

        let Revenue(revenue) = tx
            .execute(Select(By::<Revenue, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let revenue = revenue
            .checked_add(reservation.total)
            .ok_or_else(|| tracerr::new!(E::RevenueOverflow))?;

        reservation.status = Status::CheckedOut;
        tx.execute(Update(reservation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Update(Revenue(revenue)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        if repeated {
            log::warn!(
                "reservation {} of room {room_number} is settled once again",
                reservation.id,
            );
        }
        log::info!(
            "check-out of room {room_number}: invoice {}",
            reservation.total,
        );

        Ok(Settlement {
            invoice: reservation.total,
            reservation,
            repeated,
        })
    }
}

/// Error of [`CheckOut`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Room`] has no [`Reservation`] to settle.
    #[display("`Room(number: {_0})` has no reservation to check out")]
    NoReservationFound(#[error(not(source))] room::Number),

    /// Accumulated [`Revenue`] doesn't fit into a [`Money`] amount anymore.
    #[display("`Revenue` overflows")]
    RevenueOverflow,
}
