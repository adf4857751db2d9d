//! Primitive types for the [API Hub playground](https://docs.rs/api-hub-playground).
//!
//! This module contains the basic data structures shared by the playground
//! service and its packages (configuration, clock, test helpers).
use std::time::Duration;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// The database management system used to persist the listed APIs and the
/// global settings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// The `SQLite3` database driver.
    Sqlite3,
    /// The `MySQL` database driver.
    #[serde(rename = "mysql")]
    MySQL,
}

/// What to do when the listed API cannot be looked up before forwarding a
/// playground request.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default, Display)]
#[serde(rename_all = "lowercase")]
pub enum LookupErrorPolicy {
    /// Forward the request ungated and without telemetry.
    #[default]
    Allow,
    /// Refuse the request.
    Deny,
}
