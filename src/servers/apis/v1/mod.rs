//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Auth | Version
//! ---|---|---|---
//! `Playground` | Request proxy | none | [`v1`](crate::servers::apis::v1::context::playground)
//! `Api` | Listed APIs and their usage | token | [`v1`](crate::servers::apis::v1::context::api)
//! `Settings` | Global playground toggle | token | [`v1`](crate::servers::apis::v1::context::settings)
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the authentication process.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
