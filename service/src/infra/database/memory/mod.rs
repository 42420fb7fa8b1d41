//! In-memory [`Database`] implementation.

mod impls;

use std::{future::Future, sync::Arc};

use common::{
    money::Currency,
    operations::{Commit, Transact},
    Money,
};
use derive_more::{Deref, Display, Error as StdError};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracerr::Traced;

use crate::{
    domain::{Guest, Reservation, Room},
    infra::{database, Database},
};

/// In-memory [`Database`] client.
///
/// Owns the whole hotel [`Ledger`] for the lifetime of the process.
#[derive(Clone, Debug, Deref)]
pub struct Memory<T = NonTx>(T);

impl Memory {
    /// Creates a new empty [`Memory`] database keeping its revenue in the
    /// provided [`Currency`].
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self(NonTx(Arc::new(Mutex::new(Ledger {
            rooms: Vec::new(),
            guests: Vec::new(),
            reservations: Vec::new(),
            revenue: Money::zero(currency),
        }))))
    }
}

/// Collections of a hotel and its accumulated revenue.
#[derive(Clone, Debug)]
pub struct Ledger {
    /// [`Room`]s in the order they were added.
    rooms: Vec<Room>,

    /// [`Guest`]s in the order they were registered.
    guests: Vec<Guest>,

    /// [`Reservation`]s in the order they were made.
    reservations: Vec<Reservation>,

    /// Revenue accumulated by check-outs.
    revenue: Money,
}

/// Storage a [`Memory`] database operates on.
pub trait Storage {
    /// Runs the provided function over the current [`Ledger`].
    fn read<R>(
        &self,
        f: impl FnOnce(&Ledger) -> R,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>;

    /// Runs the provided function mutating the current [`Ledger`].
    fn write<R>(
        &self,
        f: impl FnOnce(&mut Ledger) -> R,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>;
}

/// Non-transactional [`Storage`].
///
/// Every operation locks the [`Ledger`] for its own duration only.
#[derive(Clone, Debug)]
pub struct NonTx(Arc<Mutex<Ledger>>);

impl Storage for NonTx {
    async fn read<R>(
        &self,
        f: impl FnOnce(&Ledger) -> R,
    ) -> Result<R, Traced<database::Error>> {
        Ok(f(&*self.0.lock().await))
    }

    async fn write<R>(
        &self,
        f: impl FnOnce(&mut Ledger) -> R,
    ) -> Result<R, Traced<database::Error>> {
        Ok(f(&mut *self.0.lock().await))
    }
}

/// Transactional [`Storage`].
///
/// Holds the [`Ledger`] lock until committed or dropped, and applies all the
/// changes to a staged copy, which is published on [`Commit`] only. Dropping
/// a [`Tx`] without committing discards the changes.
#[derive(Debug)]
pub struct Tx(Mutex<Option<Staged>>);

/// [`Ledger`] staged by a [`Tx`].
#[derive(Debug)]
struct Staged {
    /// Lock of the shared [`Ledger`].
    guard: OwnedMutexGuard<Ledger>,

    /// Copy of the [`Ledger`] the changes are applied to.
    ledger: Ledger,
}

impl Storage for Tx {
    async fn read<R>(
        &self,
        f: impl FnOnce(&Ledger) -> R,
    ) -> Result<R, Traced<database::Error>> {
        let staged = self.0.lock().await;
        let staged = staged.as_ref().ok_or_else(|| {
            tracerr::new!(database::Error::from(Error::TransactionFinished))
        })?;
        Ok(f(&staged.ledger))
    }

    async fn write<R>(
        &self,
        f: impl FnOnce(&mut Ledger) -> R,
    ) -> Result<R, Traced<database::Error>> {
        let mut staged = self.0.lock().await;
        let staged = staged.as_mut().ok_or_else(|| {
            tracerr::new!(database::Error::from(Error::TransactionFinished))
        })?;
        Ok(f(&mut staged.ledger))
    }
}

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        let guard = Arc::clone(&self.0 .0).lock_owned().await;
        let ledger = Ledger::clone(&guard);
        Ok(Memory(Tx(Mutex::new(Some(Staged { guard, ledger })))))
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        let Staged { mut guard, ledger } =
            self.0 .0.lock().await.take().ok_or_else(|| {
                tracerr::new!(database::Error::from(
                    Error::TransactionFinished
                ))
            })?;
        *guard = ledger;
        Ok(())
    }
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Transaction is used after being committed.
    #[display("Transaction is already committed")]
    TransactionFinished,
}

#[cfg(test)]
mod spec {
    use common::{
        money::Currency,
        operations::{By, Commit, Insert, Select, Transact},
    };

    use crate::{
        domain::{room, Room},
        infra::Database as _,
    };

    use super::Memory;

    fn room(number: u32) -> Room {
        Room::new(
            room::Number::from(number),
            room::Category::new("double").unwrap(),
            "120USD".parse().unwrap(),
        )
    }

    async fn rooms(db: &Memory) -> Vec<Room> {
        db.execute(Select(By::<Vec<Room>, Option<room::Category>>::new(None)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn publishes_transaction_on_commit() {
        let db = Memory::new(Currency::Usd);

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(room(102))).await.unwrap();
        tx.execute(Commit).await.unwrap();
        drop(tx);

        assert_eq!(rooms(&db).await, vec![room(102)]);
    }

    #[tokio::test]
    async fn discards_uncommitted_transaction() {
        let db = Memory::new(Currency::Usd);

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(room(102))).await.unwrap();
        assert_eq!(
            tx.execute(Select(By::<Vec<Room>, Option<room::Category>>::new(None)))
                .await
                .unwrap()
                .len(),
            1,
        );
        drop(tx);

        assert!(rooms(&db).await.is_empty());
    }

    #[tokio::test]
    async fn rejects_use_after_commit() {
        let db = Memory::new(Currency::Usd);

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Commit).await.unwrap();

        assert!(tx.execute(Insert(room(102))).await.is_err());
        assert!(tx.execute(Commit).await.is_err());
    }
}
