//! [`Command`] for adding a new [`Room`].

use common::{
    money::Currency,
    operations::{By, Commit, Insert, Select, Transact, Transacted},
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, Room},
    infra::{database, Database},
    read::ledger::Revenue,
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Room`].
#[derive(Clone, Debug)]
pub struct AddRoom {
    /// [`room::Number`] of a new [`Room`].
    pub number: room::Number,

    /// [`room::Category`] of a new [`Room`].
    pub category: room::Category,

    /// Nightly [`room::Rate`] of a new [`Room`].
    pub rate: room::Rate,
}

impl<Db> Command<AddRoom> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Room>, room::Number>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Revenue, ()>>,
            Ok = Revenue,
            Err = Traced<database::Error>,
        > + Database<Insert<Room>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddRoom) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddRoom {
            number,
            category,
            rate,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let Revenue(revenue) = tx
            .execute(Select(By::<Revenue, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let currency = rate.per_night().currency;
        if currency != revenue.currency {
            return Err(tracerr::new!(E::CurrencyMismatch {
                expected: revenue.currency,
                actual: currency,
            }));
        }

        let existing = tx
            .execute(Select(By::<Option<Room>, _>::new(number)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::RoomNumberOccupied(number)));
        }

        let room = Room::new(number, category, rate);
        tx.execute(Insert(room.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "room {} ({}) added at {}/night",
            room.number,
            room.category,
            room.rate,
        );

        Ok(room)
    }
}

/// Error of [`AddRoom`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`room::Rate`] is given in a [`Currency`] other than the hotel's one.
    #[display("`Rate` in `{actual}` while the hotel charges in `{expected}`")]
    CurrencyMismatch {
        /// [`Currency`] the hotel charges in.
        expected: Currency,

        /// [`Currency`] of the provided [`room::Rate`].
        actual: Currency,
    },

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Room`] with the provided [`room::Number`] already exists.
    #[display("`Room(number: {_0})` already exists")]
    RoomNumberOccupied(#[error(not(source))] room::Number),
}
