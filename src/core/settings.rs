//! Global settings.
//!
//! Settings are key/value records. The playground reads them through a
//! [`SettingsAccessor`] so that callers can substitute fixed values.
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::databases::error::Error;
use super::databases::Database;

/// Key of the platform wide playground toggle. A missing record means
/// enabled.
pub const GLOBAL_PLAYGROUND_ENABLED: &str = "GLOBAL_PLAYGROUND_ENABLED";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: Value,
}

impl Setting {
    #[must_use]
    pub fn new(key: &str, value: Value) -> Self {
        Self {
            key: key.to_owned(),
            value,
        }
    }

    /// Only an explicit JSON `false` disables a feature.
    #[must_use]
    pub fn is_explicitly_false(&self) -> bool {
        matches!(self.value, Value::Bool(false))
    }
}

/// Read access to the settings.
#[cfg_attr(test, automock)]
pub trait SettingsAccessor: Sync + Send {
    /// It returns the setting with the given key, if any.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the settings store cannot be read.
    fn find(&self, key: &str) -> Result<Option<Setting>, Error>;
}

/// Settings read from the database on every call.
pub struct DatabaseSettings {
    database: Arc<Box<dyn Database>>,
}

impl DatabaseSettings {
    #[must_use]
    pub fn new(database: Arc<Box<dyn Database>>) -> Self {
        Self { database }
    }
}

impl SettingsAccessor for DatabaseSettings {
    fn find(&self, key: &str) -> Result<Option<Setting>, Error> {
        self.database.get_setting(key)
    }
}

/// Settings fixed at construction time.
#[derive(Debug, Default, Clone)]
pub struct FixedSettings {
    settings: Vec<Setting>,
}

impl FixedSettings {
    #[must_use]
    pub fn new(settings: Vec<Setting>) -> Self {
        Self { settings }
    }
}

impl SettingsAccessor for FixedSettings {
    fn find(&self, key: &str) -> Result<Option<Setting>, Error> {
        Ok(self.settings.iter().find(|setting| setting.key == key).cloned())
    }
}
