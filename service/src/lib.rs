//! Service contains the business logic of the hotel ledger.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod config;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, config::Config, query::Query};

/// Hotel ledger service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db) -> Self {
        Self { config, database }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }
}

#[cfg(all(test, feature = "memory"))]
pub(crate) mod test_util {
    //! Shared fixtures of the [`Service`] tests.

    use std::str::FromStr as _;

    use common::{money::Currency, Date};

    use crate::{
        command::{AddRoom, RegisterGuest},
        config::Settlement,
        domain::{guest, reservation::Period, room, Guest},
        infra::Memory,
        Command as _, Config, Service,
    };

    /// Creates a new [`Service`] over an empty [`Memory`] database.
    pub(crate) fn service(settlement: Settlement) -> Service<Memory> {
        Service::new(Config { settlement }, Memory::new(Currency::Usd))
    }

    /// Adds a new room to the provided [`Service`].
    pub(crate) async fn add_room(
        svc: &Service<Memory>,
        number: u32,
        category: &str,
        rate: &str,
    ) {
        _ = svc
            .execute(AddRoom {
                number: room::Number::from(number),
                category: room::Category::new(category).unwrap(),
                rate: room::Rate::from_str(rate).unwrap(),
            })
            .await
            .unwrap();
    }

    /// Registers a new guest with the provided name.
    pub(crate) async fn register(svc: &Service<Memory>, name: &str) -> Guest {
        svc.execute(RegisterGuest {
            name: guest::Name::new(name).unwrap(),
            email: guest::Email::new("guest@email.com").unwrap(),
            phone: guest::Phone::new("555-0000").unwrap(),
        })
        .await
        .unwrap()
    }

    /// Creates a [`Period`] from `from` to `to` days after the `today`.
    pub(crate) fn days(today: Date, from: u32, to: u32) -> Period {
        Period::new(
            today.checked_add_days(from).unwrap().coerce(),
            today.checked_add_days(to).unwrap().coerce(),
        )
        .unwrap()
    }

    /// Fixed "today" of the tests.
    pub(crate) fn today() -> Date {
        Date::from_str("2026-10-16").unwrap()
    }
}
