//! [`Query`] of an occupancy [`Report`].

use common::{
    operations::{By, Select, Transact, Transacted},
    Date, Percent,
};
use tracerr::Traced;

use crate::{
    domain::{room, Reservation, Room},
    infra::{database, Database},
    read::{ledger::Revenue, occupancy::Report},
    Service,
};

use super::Query;

/// [`Query`] of an occupancy [`Report`] on the provided [`Date`].
#[derive(Clone, Copy, Debug)]
pub struct Occupancy {
    /// [`Date`] to report the occupancy on.
    pub date: Date,
}

impl<Db> Query<Occupancy> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Vec<Room>, Option<room::Category>>>,
            Ok = Vec<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Reservation>, room::Number>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Revenue, ()>>,
            Ok = Revenue,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Report;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Occupancy { date }: Occupancy,
    ) -> Result<Self::Ok, Self::Err> {
        // Snapshot only, never committed.
        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;

        let rooms = tx
            .execute(Select(By::<Vec<Room>, _>::new(None)))
            .await
            .map_err(tracerr::wrap!())?;

        let (mut occupied, mut under_maintenance) = (0, 0);
        for room in &rooms {
            if room.under_maintenance {
                under_maintenance += 1;
                continue;
            }
            let reservations = tx
                .execute(Select(By::<Vec<Reservation>, _>::new(room.number)))
                .await
                .map_err(tracerr::wrap!())?;
            if reservations.iter().any(|r| r.occupies(date)) {
                occupied += 1;
            }
        }

        let Revenue(revenue) = tx
            .execute(Select(By::<Revenue, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let total = rooms.len();
        Ok(Report {
            date,
            total,
            occupied,
            available: total - occupied - under_maintenance,
            under_maintenance,
            occupancy: Percent::ratio(occupied, total),
            revenue,
        })
    }
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use std::str::FromStr as _;

    use common::{Money, Percent};

    use crate::{
        command::{BookRoom, CheckIn, CheckOut, SetRoomMaintenance},
        config::Settlement,
        domain::room,
        test_util, Command as _,
    };

    use super::Occupancy;

    #[tokio::test]
    async fn reports_empty_hotel() {
        let svc = test_util::service(Settlement::Once);
        let today = test_util::today();

        let report = svc.execute(Occupancy { date: today }).await.unwrap();

        assert_eq!(report.date, today);
        assert_eq!(report.total, 0);
        assert_eq!(report.occupied, 0);
        assert_eq!(report.available, 0);
        assert_eq!(report.under_maintenance, 0);
        assert_eq!(report.occupancy, Percent::ZERO);
        assert_eq!(report.revenue, Money::from_str("0USD").unwrap());
    }

    #[tokio::test]
    async fn counts_every_room_once() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        test_util::add_room(&svc, 102, "double", "120USD").await;
        test_util::add_room(&svc, 201, "suite", "200USD").await;
        test_util::add_room(&svc, 202, "double", "120USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        for number in [101, 201] {
            _ = svc
                .execute(BookRoom {
                    guest_id: guest.id,
                    room_number: room::Number::from(number),
                    period: test_util::days(today, 1, 4),
                })
                .await
                .unwrap();
        }
        _ = svc
            .execute(SetRoomMaintenance {
                number: room::Number::from(202),
                under_maintenance: true,
            })
            .await
            .unwrap();
        let tomorrow = today.checked_add_days(1).unwrap();

        let report = svc.execute(Occupancy { date: tomorrow }).await.unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.occupied, 2);
        assert_eq!(report.available, 1);
        assert_eq!(report.under_maintenance, 1);
        assert_eq!(report.occupancy, Percent::from_str("50").unwrap());

        // Nobody stays yet.
        let report = svc.execute(Occupancy { date: today }).await.unwrap();
        assert_eq!(report.occupied, 0);
        assert_eq!(report.available, 3);
        assert_eq!(report.occupancy, Percent::ZERO);
    }

    #[tokio::test]
    async fn frees_room_after_check_out() {
        let svc = test_util::service(Settlement::Once);
        test_util::add_room(&svc, 101, "single", "80USD").await;
        test_util::add_room(&svc, 102, "double", "120USD").await;
        test_util::add_room(&svc, 201, "suite", "200USD").await;
        let guest = test_util::register(&svc, "María García").await;
        let today = test_util::today();
        let tomorrow = today.checked_add_days(1).unwrap();
        _ = svc
            .execute(BookRoom {
                guest_id: guest.id,
                room_number: room::Number::from(101),
                period: test_util::days(today, 1, 4),
            })
            .await
            .unwrap();
        _ = svc
            .execute(CheckIn {
                room_number: room::Number::from(101),
                date: tomorrow,
            })
            .await
            .unwrap();

        let report = svc.execute(Occupancy { date: tomorrow }).await.unwrap();
        assert_eq!(report.occupied, 1);
        assert_eq!(report.occupancy, Percent::from_str("33.33").unwrap());

        _ = svc
            .execute(CheckOut {
                room_number: room::Number::from(101),
            })
            .await
            .unwrap();

        let report = svc.execute(Occupancy { date: tomorrow }).await.unwrap();
        assert_eq!(report.occupied, 0);
        assert_eq!(report.available, 3);
        assert_eq!(report.revenue, Money::from_str("240USD").unwrap());
    }
}
