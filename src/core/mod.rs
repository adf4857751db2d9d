//! The core `playground` module contains the request proxy logic, which is
//! independent of the delivery layer.
//!
//! ```text
//! Delivery layer    Domain layer
//!
//!   HTTP API |> Playground: Access gate -> Forwarder -> Telemetry
//! ```
//!
//! # Table of contents
//!
//! - [Playground](#playground)
//! - [Proxy request](#proxy-request)
//! - [Administration](#administration)
//! - [Persistence](#persistence)
//!
//! # Playground
//!
//! The [`Playground`] lets users of the hub try a listed API from the
//! browser. The client describes a request (method, URL, headers and body)
//! and the playground sends it from the server, so the origin does not need
//! to allow cross origin requests.
//!
//! # Proxy request
//!
//! A [`ProxyRequest`](forwarder::ProxyRequest) goes through these steps:
//!
//! 1. A request without URL is rejected without side effects.
//! 2. The [`AccessGate`](gate::AccessGate) decides whether it may proceed.
//!    See the [`gate`] module for the rules.
//! 3. The [`Forwarder`](forwarder::Forwarder) normalizes it into an
//!    [`OutboundRequest`](forwarder::OutboundRequest), sends it to the origin
//!    and measures the elapsed time. Origin errors are passed through. An
//!    invalid URL, method or header and transport failures become a
//!    `Bad Gateway` outcome.
//! 4. When the gate resolved a listed API, its usage counters are updated.
//!    See the [`telemetry`] module.
//!
//! ```text
//! let outcome = playground.proxy(&request).await?;
//!
//! match outcome {
//!     ProxyOutcome::Forwarded(response) => { /* origin status, headers, data ... */ }
//!     ProxyOutcome::BadGateway(bad_gateway) => { /* message, code, duration */ }
//! }
//! ```
//!
//! # Administration
//!
//! Besides proxying, the playground exposes the operations needed to manage
//! it: listing APIs, reading their usage, the owner toggle and the global
//! toggle.
//!
//! # Persistence
//!
//! Listed APIs and settings are persisted with a [`Database`](databases::Database).
pub mod api;
pub mod databases;
pub mod error;
pub mod forwarder;
pub mod gate;
pub mod services;
pub mod settings;
pub mod telemetry;

use std::panic::Location;
use std::sync::Arc;

use api_hub_configuration::Core;
use serde_json::Value;

use self::api::{ApiEntity, ApiId};
use self::databases::Database;
use self::error::Error;
use self::forwarder::{Forwarder, HttpClient, ProxyOutcome, ProxyRequest};
use self::gate::{AccessGate, Admission};
use self::settings::{Setting, SettingsAccessor, GLOBAL_PLAYGROUND_ENABLED};

/// The domain layer playground service.
///
/// Its main responsibility is to forward playground requests to the origin
/// servers and keep the usage of the listed APIs.
pub struct Playground {
    pub database: Arc<Box<dyn Database>>,
    settings: Arc<dyn SettingsAccessor>,
    gate: AccessGate,
    forwarder: Forwarder,
}

impl Playground {
    #[must_use]
    pub fn new(
        config: &Core,
        database: Arc<Box<dyn Database>>,
        settings: Arc<dyn SettingsAccessor>,
        client: Arc<dyn HttpClient>,
    ) -> Playground {
        Playground {
            database,
            settings,
            gate: AccessGate::new(config.playground.on_lookup_error),
            forwarder: Forwarder::new(client),
        }
    }

    /// It forwards a playground request to the origin.
    ///
    /// # Context: Proxy request
    ///
    /// # Errors
    ///
    /// Will return `MissingUrl` if the request has no URL, or a gate refusal
    /// if the playground is disabled. Requests that cannot be sent and
    /// transport failures are not errors, they are returned as
    /// [`ProxyOutcome::BadGateway`].
    pub async fn proxy(&self, request: &ProxyRequest) -> Result<ProxyOutcome, Error> {
        request.target_url()?;

        let admission = self
            .gate
            .check(request.api_id.as_ref(), &**self.database, self.settings.as_ref())?;

        let outcome = self.forwarder.forward(request).await;

        if let Admission::Tracked(api) = admission {
            telemetry::record(&self.database, &api, outcome.duration(), outcome.is_error());
        }

        Ok(outcome)
    }

    /// It lists a new API with the playground enabled and zeroed usage.
    ///
    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return `ApiAlreadyExists` if the id is taken, or a database error.
    pub fn register_api(&self, api_id: ApiId, name: &str) -> Result<ApiEntity, Error> {
        if self.database.get_api(&api_id)?.is_some() {
            return Err(Error::ApiAlreadyExists {
                api_id,
                location: Location::caller(),
            });
        }

        let api = ApiEntity::new(api_id, name);

        self.database.add_api(&api)?;

        Ok(api)
    }

    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return `ApiNotFound` if there is no API with the given id, or a
    /// database error.
    pub fn get_api(&self, api_id: &ApiId) -> Result<ApiEntity, Error> {
        self.database.get_api(api_id)?.ok_or_else(|| Error::ApiNotFound {
            api_id: api_id.clone(),
            location: Location::caller(),
        })
    }

    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return a database error.
    pub fn get_apis(&self) -> Result<Vec<ApiEntity>, Error> {
        Ok(self.database.load_apis()?)
    }

    /// It sets the owner toggle of the playground for an API.
    ///
    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return `ApiNotFound` if there is no API with the given id, or a
    /// database error.
    pub fn set_api_playground_enabled(&self, api_id: &ApiId, enabled: bool) -> Result<(), Error> {
        let updated = self.database.set_api_playground_enabled(api_id, enabled)?;

        if updated == 0 {
            return Err(Error::ApiNotFound {
                api_id: api_id.clone(),
                location: Location::caller(),
            });
        }

        Ok(())
    }

    /// The global playground toggle, if it has been set.
    ///
    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return a database error.
    pub fn get_global_playground_setting(&self) -> Result<Option<Setting>, Error> {
        Ok(self.database.get_setting(GLOBAL_PLAYGROUND_ENABLED)?)
    }

    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return a database error.
    pub fn set_global_playground_enabled(&self, enabled: bool) -> Result<(), Error> {
        self.database
            .set_setting(&Setting::new(GLOBAL_PLAYGROUND_ENABLED, Value::Bool(enabled)))?;
        Ok(())
    }

    /// It removes the global toggle. A missing toggle means enabled.
    ///
    /// # Context: Administration
    ///
    /// # Errors
    ///
    /// Will return a database error.
    pub fn remove_global_playground_setting(&self) -> Result<(), Error> {
        self.database.remove_setting(GLOBAL_PLAYGROUND_ENABLED)?;
        Ok(())
    }
}
