//! [`Query`] of [`Room`]s free for a [`Period`].

use common::operations::{By, Select, Transact, Transacted};
use tracerr::Traced;

use crate::{
    domain::{reservation::Period, room, Reservation, Room},
    infra::{database, Database},
    Service,
};

use super::Query;

/// [`Query`] of [`Room`]s which can be booked for a [`Period`].
#[derive(Clone, Debug)]
pub struct AvailableRooms {
    /// [`Period`] the [`Room`]s should be free for.
    pub period: Period,

    /// [`room::Category`] to narrow the search to, if any.
    pub category: Option<room::Category>,
}

impl<Db> Query<AvailableRooms> for Service<Db>
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
        >,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: AvailableRooms,
    ) -> Result<Self::Ok, Self::Err> {
        let AvailableRooms { period, category } = query;

        // Read-only, so dropped without committing.
        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;

        select(&tx, &period, category).await
    }
}

/// Selects [`Room`]s of the provided [`room::Category`] (or any, if [`None`])
/// which are not under maintenance and have no confirmed [`Reservation`]
/// overlapping the provided [`Period`], in the order they were added.
///
/// [`Room::is_available`] is not consulted: availability for dates is
/// derived from [`Reservation`]s only.
pub(crate) async fn select<Db>(
    db: &Db,
    period: &Period,
    category: Option<room::Category>,
) -> Result<Vec<Room>, Traced<database::Error>>
where
    Db: Database<
            Select<By<Vec<Room>, Option<room::Category>>>,
            Ok = Vec<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Reservation>, room::Number>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        >,
{
    let rooms = db
        .execute(Select(By::<Vec<Room>, _>::new(category)))
        .await
        .map_err(tracerr::wrap!())?;

    let mut available = Vec::with_capacity(rooms.len());
    for room in rooms {
        if room.under_maintenance {
            continue;
        }
        let reservations = db
            .execute(Select(By::<Vec<Reservation>, _>::new(room.number)))
            .await
            .map_err(tracerr::wrap!())?;
        if !reservations.iter().any(|r| r.conflicts_with(period)) {
            available.push(room);
        }
    }
    Ok(available)
}
