//! [`Command`] for putting a [`Room`] under maintenance or back in service.

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, Room},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for toggling the maintenance flag of a [`Room`].
#[derive(Clone, Copy, Debug)]
pub struct SetRoomMaintenance {
    /// [`room::Number`] of the [`Room`] to update.
    pub number: room::Number,

    /// Whether the [`Room`] goes under maintenance.
    pub under_maintenance: bool,
}

impl<Db> Command<SetRoomMaintenance> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Room>, room::Number>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<Update<Room>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetRoomMaintenance,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetRoomMaintenance {
            number,
            under_maintenance,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut room = tx
            .execute(Select(By::<Option<Room>, _>::new(number)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| tracerr::new!(E::RoomNotFound(number)))?;

        room.under_maintenance = under_maintenance;
        tx.execute(Update(room.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        if under_maintenance {
            log::info!("room {number} is under maintenance");
        } else {
            log::info!("room {number} is back in service");
        }

        Ok(room)
    }
}

/// Error of [`SetRoomMaintenance`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Room`] with the provided [`room::Number`] doesn't exist.
    #[display("`Room(number: {_0})` doesn't exist")]
    RoomNotFound(#[error(not(source))] room::Number),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        config::Settlement, domain::room, query, test_util, Command as _,
    };

    use super::{ExecutionError, SetRoomMaintenance};

    #[tokio::test]
    async fn toggles_maintenance() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;

        let room = svc
            .execute(SetRoomMaintenance {
                number: room::Number::from(101),
                under_maintenance: true,
            })
            .await
            .unwrap();
        assert!(room.under_maintenance);
        assert_eq!(
            svc.execute(query::room::ByNumber::by(room::Number::from(101)))
                .await
                .unwrap(),
            Some(room),
        );

        let room = svc
            .execute(SetRoomMaintenance {
                number: room::Number::from(101),
                under_maintenance: false,
            })
            .await
            .unwrap();
        assert!(!room.under_maintenance);
    }

    #[tokio::test]
    async fn fails_on_unknown_room() {
        let svc = test_util::service(Settlement::Once);

        let err = svc
            .execute(SetRoomMaintenance {
                number: room::Number::from(999),
                under_maintenance: true,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::RoomNotFound(_)));
    }
}
