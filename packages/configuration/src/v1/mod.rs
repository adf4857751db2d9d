//! Version `1` of the configuration.
//!
//! All sections are optional. A missing section or value takes its default.
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/api-hub/lib/database/sqlite3.db"
//!
//! [core.playground]
//! request_timeout = 30
//! user_agent = "api-hub-playground"
//! on_lookup_error = "allow"
//!
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;
pub mod playground;

use std::fs;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// The whole playground service configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration: persistence and proxy behaviour.
    #[serde(default)]
    pub core: Core,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. Values given in
    /// overriding environment variables take precedence over the TOML
    /// sources.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the environment variables or the TOML content do
    /// not match the configuration structure, or if a value is out of range.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.core.playground.validate()?;

        Ok(config)
    }

    /// Saves the configuration at the given path.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded or the file
    /// cannot be written.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        fs::write(path, self.to_toml()?).map_err(|e| Error::ConfigError {
            source: std::sync::Arc::new(e),
        })?;
        Ok(())
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }

    /// A copy of the configuration safe to be printed.
    #[must_use]
    pub fn mask_secrets(mut self) -> Self {
        self.core.database.mask_secrets();
        self.http_api.mask_secrets();
        self
    }
}
