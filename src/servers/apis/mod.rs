//! The playground REST API with all its versions.
//!
//! The API has two groups of endpoints:
//!
//! - The **public** playground endpoints. The browser sends them the
//!   description of a request and the server forwards it to the origin.
//! - The **administration** endpoints. They require an authorization token
//!   and are intended for internal use only. They must not be exposed
//!   directly to the internet.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Authentication](#authentication)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](api_hub_configuration::HttpApi)
//! section:
//!
//! ```toml
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! When you run the application you will see a message like this one:
//!
//! ```text
//! 2026-10-19T10:12:03.418297Z  INFO API: API server started on http://127.0.0.1:1212
//! ```
//!
//! You can check the API is running with:
//!
//! ```bash
//! curl -s "http://127.0.0.1:1212/api/health_check"
//! ```
//!
//! # Authentication
//!
//! The administration endpoints use a `token` query param:
//!
//! ```bash
//! curl -s "http://127.0.0.1:1212/api/v1/apis?token=MyAccessToken"
//! ```
//!
//! The token must be one of the `access_tokens` in the configuration.
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information.
//!
//! The playground endpoints are public.
//!
//! # Versioning
//!
//! The API version is the second segment of the path:
//! `http://<host>:<port>/api/<version>/<context>`. Currently there is only
//! one version: [v1].
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
//!
//! > **NOTICE**: you have to use quotes around the URL in the `curl`
//! > examples in order to avoid unexpected errors with the shell.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The API id URL path parameter.
///
/// For example: `http://localhost:1212/api/v1/api/{api_id}`.
///
/// It does not include validation, the handlers parse it into an
/// [`ApiId`](crate::core::api::ApiId) in order to provide a more specific
/// error message.
#[derive(Deserialize)]
pub struct ApiIdParam(pub String);

/// The version of the HTTP Api.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP Api.
    V1,
}
