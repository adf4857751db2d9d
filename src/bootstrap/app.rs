//! Setup for the main application.
//!
//! The [`setup`] function builds the application dependencies:
//!
//! - It loads the configuration.
//! - It initializes the logging.
//! - It initializes the domain layer, the core [`Playground`].
use std::sync::Arc;

use api_hub_clock::static_time;
use api_hub_configuration::{Configuration, Info, DEFAULT_CONFIG_TOML_PATH};

use super::logging;
use crate::core::services::playground_factory;
use crate::core::Playground;

/// It loads the configuration from the environment and builds the main
/// domain [`Playground`] struct.
///
/// # Panics
///
/// Setup can fail if the configuration is invalid.
#[must_use]
pub fn setup() -> (Configuration, Arc<Playground>) {
    let configuration = initialize_configuration();

    let playground = initialize_with_configuration(&configuration);

    (configuration, playground)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file
/// or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Playground> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(initialize_playground(configuration))
}

/// It initializes the application static values.
///
/// These values are accessible throughout the entire application:
///
/// - The time when the application started.
pub fn initialize_static() {
    // Set the time of the API Hub playground starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It loads the application configuration from the environment.
///
/// # Panics
///
/// Will panic if the configuration sources cannot be read or do not match
/// the configuration structure.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_CONFIG_TOML_PATH.to_string()).expect("info to load configuration is not valid");

    Configuration::load(&info).expect("error loading configuration from sources")
}

/// It builds the domain playground.
///
/// The playground is the domain layer service. It's the entrypoint to make
/// requests specific to the domain.
#[must_use]
pub fn initialize_playground(config: &Configuration) -> Playground {
    playground_factory(config)
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info
/// about logging.
pub fn initialize_logging(config: &Configuration) {
    logging::setup(config);
}
