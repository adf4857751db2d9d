//! Configurations used by tests.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use api_hub_configuration::{Configuration, Threshold};
use api_hub_primitives::LookupErrorPolicy;

use crate::random;

/// The access token configured for the administration endpoints in
/// ephemeral configurations.
pub const ADMIN_ACCESS_TOKEN: &str = "MyAccessToken";

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one server at the same time.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);
    config.http_api.access_tokens.clear();
    config.http_api.add_token("admin", ADMIN_ACCESS_TOKEN);

    // Short timeout so slow origin tests finish quickly
    config.core.playground.request_timeout = 2;

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("data_{random_db_id}.db"));
    temp_file.to_str().unwrap().clone_into(&mut config.core.database.path);

    config
}

/// Ephemeral configuration that refuses requests whose target API cannot
/// be looked up.
#[must_use]
pub fn ephemeral_with_strict_lookup() -> Configuration {
    let mut config = ephemeral();

    config.core.playground.on_lookup_error = LookupErrorPolicy::Deny;

    config
}
