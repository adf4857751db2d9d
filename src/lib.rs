//! **API Hub playground** is the server side request proxy behind the
//! "try it" playground of the API Hub directory of public APIs.
//!
//! The playground lets a visitor describe a request (method, URL, headers
//! and body) for a listed API and sends it from the server, so the origin
//! does not need to allow cross origin requests. Every proxied request for
//! a listed API updates the usage statistics of that API: number of
//! requests, number of errors, running mean latency and last use.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - Forwarding of arbitrary `http` and `https` requests with a bounded timeout.
//! - Origin errors are passed through, transport failures become a `502 Bad Gateway` response.
//! - Owner toggle to disable the playground for one API.
//! - Global toggle to disable the playground for maintenance.
//! - Usage telemetry per API.
//! - Persistence with `SQLite3` or `MySQL`.
//! - Administration REST API.
//!
//! # Services
//!
//! There is only one service: the HTTP API. It serves the public playground
//! endpoint and the administration endpoints, which require an access token.
//!
//! # Installation
//!
//! ```text
//! git clone https://github.com/api-hub/api-hub-playground.git \
//!   && cd api-hub-playground \
//!   && cargo build --release \
//!   && mkdir -p ./storage/api-hub/lib/database
//! ```
//!
//! # Configuration
//!
//! The configuration is loaded from the TOML file
//! `./share/default/config/api-hub.toml` unless another source is given.
//! Refer to the [`api-hub-configuration`](api_hub_configuration) crate for
//! all the options and the environment variables.
//!
//! # Usage
//!
//! Run the service with `cargo run`. A listed API is registered with:
//!
//! ```text
//! curl -X POST "http://127.0.0.1:1212/api/v1/apis?token=MyAccessToken" \
//!   -H "Content-Type: application/json" \
//!   -d '{"id": "weather-api", "name": "Weather API"}'
//! ```
//!
//! and tried from the playground with:
//!
//! ```text
//! curl -X POST "http://127.0.0.1:1212/api/v1/playground/proxy/weather-api" \
//!   -H "Content-Type: application/json" \
//!   -d '{"method": "GET", "url": "https://api.example.com/forecast"}'
//! ```
//!
//! Refer to the [`servers::apis`] module for the endpoints.
//!
//! # Components
//!
//! ```text
//! Delivery layer    Domain layer
//!
//!   HTTP API |> Core playground
//! ```
//!
//! - [`core`]: the access gate, the forwarder, the telemetry and the persistence.
//! - [`servers`]: the HTTP API.
//! - [`bootstrap`]: configuration loading, logging and jobs.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = api_hub_clock::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = api_hub_clock::clock::Stopped;
