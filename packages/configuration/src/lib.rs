//! Configuration data structures for the [API Hub playground](https://docs.rs/api-hub-playground).
//!
//! The configuration is loaded with [Figment](https://docs.rs/figment) from
//! these sources, from lowest to highest priority:
//!
//! 1. The default values.
//! 2. The TOML configuration, taken from the `API_HUB_CONFIG_TOML`
//!    environment variable if it is set, or from the file at
//!    `API_HUB_CONFIG_TOML_PATH` (default `./share/default/config/api-hub.toml`).
//! 3. Environment variables prefixed with `API_HUB_CONFIG_OVERRIDE_`. A
//!    double underscore separates sections, for example:
//!    `API_HUB_CONFIG_OVERRIDE_HTTP_API__ACCESS_TOKENS__ADMIN=MyAccessToken`.
//!
//! A complete configuration file:
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
pub mod v1;

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use thiserror::Error;

/// The whole configuration in TOML format. It has priority over the
/// configuration file.
pub const ENV_VAR_CONFIG_TOML: &str = "API_HUB_CONFIG_TOML";

/// The configuration file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "API_HUB_CONFIG_TOML_PATH";

/// Prefix of the environment variables overriding single values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "API_HUB_CONFIG_OVERRIDE_";

/// Separator between sections in the overriding environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub const DEFAULT_CONFIG_TOML_PATH: &str = "./share/default/config/api-hub.toml";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type Database = v1::database::Database;
pub type HttpApi = v1::http_api::HttpApi;
pub type Logging = v1::logging::Logging;
pub type Playground = v1::playground::Playground;
pub type Threshold = v1::logging::Threshold;

pub type AccessTokens = HashMap<String, String>;

/// Where to read the configuration from.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Reads the configuration sources from the environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Configuration given explicitly as TOML, without reading the
    /// environment for the sources.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: DEFAULT_CONFIG_TOML_PATH.to_owned(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The configuration sources could not be merged or the result does not
    /// match the configuration structure.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: &'static str },

    #[error("Unable to encode the configuration as TOML: {source}")]
    UnableToEncode {
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Arc::new(err) }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::UnableToEncode { source: Arc::new(err) }
    }
}
