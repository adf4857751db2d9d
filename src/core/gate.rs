//! The access gate.
//!
//! Before any network call the gate decides whether a proxy request may
//! proceed. The checks run in this order:
//!
//! 1. A request without an API id is admitted anonymously: nothing to gate
//!    and nothing to record.
//! 2. The API is looked up. When it does not exist the request is admitted
//!    anonymously. When the lookup fails the configured
//!    [`LookupErrorPolicy`] decides: `allow` admits it anonymously, `deny`
//!    refuses it.
//! 3. When the global [`GLOBAL_PLAYGROUND_ENABLED`] setting is explicitly
//!    `false` the request is refused with the maintenance message.
//! 4. When the API has the playground disabled by its owner the request is
//!    refused with the owner message.
//! 5. Otherwise the request is admitted and the API usage will be recorded.
//!
//! The gate never writes.
use std::panic::Location;

use api_hub_primitives::LookupErrorPolicy;
use tracing::{debug, warn};

use super::api::{ApiEntity, ApiId};
use super::databases::Database;
use super::error::Error;
use super::settings::{SettingsAccessor, GLOBAL_PLAYGROUND_ENABLED};

/// The result of a request that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Forward without recording usage.
    Anonymous,
    /// Forward and record usage for the resolved API.
    Tracked(ApiEntity),
}

#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    on_lookup_error: LookupErrorPolicy,
}

impl AccessGate {
    #[must_use]
    pub fn new(on_lookup_error: LookupErrorPolicy) -> Self {
        Self { on_lookup_error }
    }

    /// It decides whether a proxy request for the given API may be forwarded.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `PlaygroundUnderMaintenance` if the global toggle is off.
    /// - `PlaygroundDisabledByOwner` if the API toggle is off.
    /// - `ApiLookupFailed` if the API lookup failed and the policy is `deny`.
    pub fn check(
        &self,
        api_id: Option<&ApiId>,
        database: &dyn Database,
        settings: &dyn SettingsAccessor,
    ) -> Result<Admission, Error> {
        let Some(api_id) = api_id else {
            return Ok(Admission::Anonymous);
        };

        let api = match database.get_api(api_id) {
            Ok(Some(api)) => api,
            Ok(None) => {
                debug!(%api_id, "api not found, forwarding ungated");
                return Ok(Admission::Anonymous);
            }
            Err(err) => match self.on_lookup_error {
                LookupErrorPolicy::Allow => {
                    warn!(%api_id, %err, "api lookup failed, forwarding ungated");
                    return Ok(Admission::Anonymous);
                }
                LookupErrorPolicy::Deny => {
                    warn!(%api_id, %err, "api lookup failed, refusing request");
                    return Err(Error::ApiLookupFailed {
                        api_id: api_id.clone(),
                        source: err,
                        location: Location::caller(),
                    });
                }
            },
        };

        match settings.find(GLOBAL_PLAYGROUND_ENABLED) {
            Ok(Some(setting)) if setting.is_explicitly_false() => {
                return Err(Error::PlaygroundUnderMaintenance {
                    location: Location::caller(),
                });
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "unable to read the global playground setting, assuming enabled");
            }
        }

        if !api.playground_enabled {
            return Err(Error::PlaygroundDisabledByOwner {
                api_id: api.id,
                location: Location::caller(),
            });
        }

        Ok(Admission::Tracked(api))
    }
}
