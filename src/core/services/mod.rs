//! Core services.
//!
//! [`playground_factory`] builds the [`Playground`] with its production
//! collaborators: the configured database, settings read from that
//! database and a `reqwest` HTTP client.
use std::sync::Arc;

use api_hub_configuration::Configuration;

use crate::core::databases::{self, Database};
use crate::core::forwarder::{HttpClient, ReqwestClient};
use crate::core::settings::{DatabaseSettings, SettingsAccessor};
use crate::core::Playground;

/// It returns a new playground building its dependencies.
///
/// # Panics
///
/// Will panic if the database cannot be opened or the HTTP client cannot be
/// built.
#[must_use]
pub fn playground_factory(config: &Configuration) -> Playground {
    let database: Arc<Box<dyn Database>> = match databases::driver::build(&config.core.database.driver, &config.core.database.path) {
        Ok(database) => Arc::new(database),
        Err(error) => {
            panic!("{}", error)
        }
    };

    let settings: Arc<dyn SettingsAccessor> = Arc::new(DatabaseSettings::new(database.clone()));

    let client: Arc<dyn HttpClient> = match ReqwestClient::new(&config.core.playground) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            panic!("{}", error)
        }
    };

    Playground::new(&config.core, database, settings, client)
}
