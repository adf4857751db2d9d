//! Database errors.
//!
//! This module contains the [Database errors](crate::core::databases::error::Error).
use std::panic::Location;
use std::sync::Arc;

use api_hub_primitives::DatabaseDriver;
use r2d2_mysql::mysql::UrlError;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The query unexpectedly returned nothing.
    #[error("The {driver} query unexpectedly returned nothing: {source}, {location}")]
    QueryReturnedNoRows {
        source: DynError,
        driver: DatabaseDriver,
        location: &'static Location<'static>,
    },

    /// The query was malformed.
    #[error("The {driver} query was malformed: {source}, {location}")]
    InvalidQuery {
        source: DynError,
        driver: DatabaseDriver,
        location: &'static Location<'static>,
    },

    /// A stored value could not be decoded.
    #[error("Malformed value stored in {driver} database: {source}, {location}")]
    MalformedValue {
        source: DynError,
        driver: DatabaseDriver,
        location: &'static Location<'static>,
    },

    /// Unable to insert a record into the database
    #[error("Unable to insert record into {driver} database, {location}")]
    InsertFailed {
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// Unable to connect to the database
    #[error("Failed to connect to {driver} database: {source}, {location}")]
    ConnectionError {
        source: DynError,
        driver: DatabaseDriver,
        location: &'static Location<'static>,
    },

    /// Unable to create a connection pool
    #[error("Failed to create r2d2 {driver} connection pool: {source}, {location}")]
    ConnectionPool {
        source: DynError,
        driver: DatabaseDriver,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    pub fn malformed<E>(err: E, driver: DatabaseDriver) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::MalformedValue {
            source: Arc::new(err),
            driver,
            location: Location::caller(),
        }
    }
}

impl From<r2d2_sqlite::rusqlite::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
        match err {
            r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows => Error::QueryReturnedNoRows {
                source: Arc::new(err),
                driver: DatabaseDriver::Sqlite3,
                location: Location::caller(),
            },
            _ => Error::InvalidQuery {
                source: Arc::new(err),
                driver: DatabaseDriver::Sqlite3,
                location: Location::caller(),
            },
        }
    }
}

impl From<r2d2_mysql::mysql::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_mysql::mysql::Error) -> Self {
        Error::InvalidQuery {
            source: Arc::new(err),
            driver: DatabaseDriver::MySQL,
            location: Location::caller(),
        }
    }
}

impl From<UrlError> for Error {
    #[track_caller]
    fn from(err: UrlError) -> Self {
        Self::ConnectionError {
            source: Arc::new(err),
            driver: DatabaseDriver::MySQL,
            location: Location::caller(),
        }
    }
}

impl From<(r2d2::Error, DatabaseDriver)> for Error {
    #[track_caller]
    fn from(e: (r2d2::Error, DatabaseDriver)) -> Self {
        let (err, driver) = e;
        Self::ConnectionPool {
            source: Arc::new(err),
            driver,
            location: Location::caller(),
        }
    }
}
