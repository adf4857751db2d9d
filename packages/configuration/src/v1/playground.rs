use std::time::Duration;

use api_hub_primitives::LookupErrorPolicy;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Configuration for the request proxy behind the playground.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Playground {
    /// Maximum time in seconds to wait for the origin of a proxied request,
    /// including reading its body. When it expires the client receives a
    /// `502 Bad Gateway` response. It must be greater than zero.
    #[serde(default = "Playground::default_request_timeout")]
    pub request_timeout: u64,

    /// `User-Agent` sent to the origin when the client did not provide one.
    #[serde(default = "Playground::default_user_agent")]
    pub user_agent: String,

    /// What to do when the listed API targeted by a request cannot be looked
    /// up: `allow` forwards it ungated and without telemetry, `deny` refuses
    /// it.
    #[serde(default = "Playground::default_on_lookup_error")]
    pub on_lookup_error: LookupErrorPolicy,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            request_timeout: Self::default_request_timeout(),
            user_agent: Self::default_user_agent(),
            on_lookup_error: Self::default_on_lookup_error(),
        }
    }
}

impl Playground {
    fn default_request_timeout() -> u64 {
        30
    }

    fn default_user_agent() -> String {
        String::from("api-hub-playground")
    }

    fn default_on_lookup_error() -> LookupErrorPolicy {
        LookupErrorPolicy::Allow
    }

    /// # Errors
    ///
    /// Will return `InvalidValue` if the request timeout is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.request_timeout == 0 {
            return Err(Error::InvalidValue {
                field: "core.playground.request_timeout",
                reason: "it must be greater than zero",
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
