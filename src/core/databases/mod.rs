//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. If there are any changes,
//! > we will implement them or provide a script to migrate to the new schema.
//!
//! The persistent objects are:
//!
//! - [Listed APIs](#listed-apis)
//! - [Settings](#settings)
//!
//! # Listed APIs
//!
//!  Field                          | Sample data                 | Description
//! ---|---|---
//!  `id`                           | `weather-api`               | Opaque unique id
//!  `name`                         | `Weather API`               | Display name
//!  `playground_enabled`           | 1                           | Owner toggle for the playground
//!  `calls`                        | 12                          | Legacy aggregate call counter
//!  `playground_total_requests`    | 12                          | Requests proxied through the playground
//!  `playground_total_errors`      | 2                           | Proxied requests that failed or got a status >= 400
//!  `playground_avg_response_time` | 153                         | Running mean latency in milliseconds
//!  `playground_last_used`         | 1672419840000               | Milliseconds since the Unix Epoch, `NULL` if never used
//!
//! The usage columns are only written by
//! [`record_playground_usage`](Database::record_playground_usage).
//!
//! # Settings
//!
//! Field   | Sample data                 | Description
//! ---|---|---
//! `key`   | `GLOBAL_PLAYGROUND_ENABLED` | Unique setting name
//! `value` | `false`                     | JSON encoded value
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

#[cfg(test)]
use mockall::automock;

use self::error::Error;
use crate::core::api::{ApiEntity, ApiId};
use crate::core::settings::Setting;
use crate::core::telemetry::PlaygroundUsage;

/// The persistence trait. It contains all the methods to interact with the database.
#[cfg_attr(test, automock)]
pub trait Database: Sync + Send {
    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Listed APIs

    /// It loads all the listed APIs, ordered by id.
    ///
    /// # Context: Listed APIs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_apis(&self) -> Result<Vec<ApiEntity>, Error>;

    /// It gets a listed API by its id.
    ///
    /// # Context: Listed APIs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_api(&self, api_id: &ApiId) -> Result<Option<ApiEntity>, Error>;

    /// It adds a listed API, including its usage counters.
    ///
    /// # Context: Listed APIs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save, for example when the id is
    /// already taken.
    fn add_api(&self, api: &ApiEntity) -> Result<usize, Error>;

    /// It sets the owner toggle of the playground for one API. It returns
    /// the number of updated records, `0` when the API does not exist.
    ///
    /// # Context: Listed APIs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to update.
    fn set_api_playground_enabled(&self, api_id: &ApiId, enabled: bool) -> Result<usize, Error>;

    /// It records one playground request in a single update: the counters
    /// are incremented in place and the average and last used time are
    /// overwritten.
    ///
    /// # Context: Listed APIs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to update.
    fn record_playground_usage(&self, api_id: &ApiId, usage: &PlaygroundUsage) -> Result<usize, Error>;

    // Settings

    /// It gets a setting by its key.
    ///
    /// # Context: Settings
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load or decode the stored value.
    fn get_setting(&self, key: &str) -> Result<Option<Setting>, Error>;

    /// It inserts or replaces a setting.
    ///
    /// # Context: Settings
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn set_setting(&self, setting: &Setting) -> Result<usize, Error>;

    /// It removes a setting. It returns the number of removed records.
    ///
    /// # Context: Settings
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to remove.
    fn remove_setting(&self, key: &str) -> Result<usize, Error>;
}
