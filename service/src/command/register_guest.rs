//! [`Command`] for registering a new [`Guest`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{guest, Guest},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`Guest`].
#[derive(Clone, Debug)]
pub struct RegisterGuest {
    /// [`guest::Name`] of a new [`Guest`].
    pub name: guest::Name,

    /// [`guest::Email`] of a new [`Guest`].
    pub email: guest::Email,

    /// [`guest::Phone`] of a new [`Guest`].
    pub phone: guest::Phone,
}

impl<Db> Command<RegisterGuest> for Service<Db>
where
    Db: Database<Insert<Guest>, Err = Traced<database::Error>>,
{
    type Ok = Guest;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RegisterGuest) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RegisterGuest { name, email, phone } = cmd;

        let guest = Guest {
            id: guest::Id::new(),
            name,
            email,
            phone,
            reservations: Vec::new(),
        };
        self.database()
            .execute(Insert(guest.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("guest {} registered", guest.name);

        Ok(guest)
    }
}

/// Error of [`RegisterGuest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
