//! [`Command`] for checking a [`Guest`] in.

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{guest, reservation::Status, room, Guest, Reservation},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::Room;

use super::Command;

/// [`Command`] for checking a [`Guest`] in a [`Room`].
#[derive(Clone, Copy, Debug)]
pub struct CheckIn {
    /// [`room::Number`] of the [`Room`] to check in.
    pub room_number: room::Number,

    /// Current [`Date`].
    pub date: Date,
}

impl<Db> Command<CheckIn> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Vec<Reservation>, room::Number>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Guest>, guest::Id>>,
            Ok = Option<Guest>,
            Err = Traced<database::Error>,
        > + Database<Update<Reservation>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CheckIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CheckIn { room_number, date } = cmd;

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
            .find(|r| r.admits(date))
            .ok_or_else(|| tracerr::new!(E::NoValidReservation(room_number)))?;

        let guest = tx
            .execute(Select(By::<Option<Guest>, _>::new(reservation.guest_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if reservation.status == Status::Confirmed {
            reservation.status = Status::CheckedIn;
            tx.execute(Update(reservation.clone()))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
            tx.execute(Commit)
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        if let Some(g) = guest {
            log::info!("check-in of room {room_number}: welcome, {}", g.name);
        } else {
            log::info!("check-in of room {room_number}");
        }

        Ok(reservation)
    }
}

/// Error of [`CheckIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Room`] has no [`Reservation`] to check in by.
    #[display("`Room(number: {_0})` has no reservation to check in by")]
    NoValidReservation(#[error(not(source))] room::Number),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::BookRoom,
        config::Settlement,
        domain::{reservation::Status, room},
        query, test_util, Command as _,
    };

    use super::{CheckIn, ExecutionError};

    #[tokio::test]
    async fn checks_in_on_arrival_day() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        let booked = svc
            .execute(BookRoom {
                guest_id: guest.id,
                room_number: room::Number::from(101),
                period: test_util::days(today, 1, 4),
            })
            .await
            .unwrap();

        let reservation = svc
            .execute(CheckIn {
                room_number: room::Number::from(101),
                date: today.checked_add_days(1).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(reservation.id, booked.id);
        assert_eq!(reservation.status, Status::CheckedIn);
        assert_eq!(
            svc.execute(query::reservations::ByGuest::by(guest.id))
                .await
                .unwrap()[0]
                .status,
            Status::CheckedIn,
        );
    }

    #[tokio::test]
    async fn repeated_check_in_changes_nothing() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        _ = svc
            .execute(BookRoom {
                guest_id: guest.id,
                room_number: room::Number::from(101),
                period: test_util::days(today, 0, 2),
            })
            .await
            .unwrap();
        let cmd = CheckIn {
            room_number: room::Number::from(101),
            date: today,
        };

        let first = svc.execute(cmd).await.unwrap();
        let second = svc.execute(cmd).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.status, Status::CheckedIn);
    }

    #[tokio::test]
    async fn rejects_early_arrival() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        _ = svc
            .execute(BookRoom {
                guest_id: guest.id,
                room_number: room::Number::from(101),
                period: test_util::days(today, 2, 4),
            })
            .await
            .unwrap();

        let err = svc
            .execute(CheckIn {
                room_number: room::Number::from(101),
                date: today,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NoValidReservation(_),
        ));
    }

    #[tokio::test]
    async fn lets_late_arrival_in() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        _ = svc
            .execute(BookRoom {
                guest_id: guest.id,
                room_number: room::Number::from(101),
                period: test_util::days(today, 1, 2),
            })
            .await
            .unwrap();

        let reservation = svc
            .execute(CheckIn {
                room_number: room::Number::from(101),
                date: today.checked_add_days(5).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(reservation.status, Status::CheckedIn);
    }

    #[tokio::test]
    async fn fails_without_reservation() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;

        let err = svc
            .execute(CheckIn {
                room_number: room::Number::from(101),
                date: test_util::today(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NoValidReservation(_),
        ));
    }
}
