//! Listed APIs API context.
//!
//! This API context is responsible for the listed APIs: registering them,
//! reading their playground usage and the owner toggle of the playground.
//!
//! All the endpoints require a token.
//!
//! # Endpoints
//!
//! - [Register an API](#register-an-api)
//! - [List APIs](#list-apis)
//! - [Get an API](#get-an-api)
//! - [Enable the playground for an API](#enable-the-playground-for-an-api)
//! - [Disable the playground for an API](#disable-the-playground-for-an-api)
//!
//! # Register an API
//!
//! `POST /api/v1/apis`
//!
//! The `id` is optional, a random one is generated when it is missing. The
//! playground is enabled and the usage counters are zero.
//!
//! ```bash
//! curl -s -X POST "http://127.0.0.1:1212/api/v1/apis?token=MyAccessToken" \
//!   -H "Content-Type: application/json" \
//!   -d '{"id":"weather-api","name":"Weather API"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "id": "weather-api",
//!   "name": "Weather API",
//!   "playgroundEnabled": true,
//!   "stats": { "calls": 0 },
//!   "playgroundStats": {
//!     "totalRequests": 0,
//!     "totalErrors": 0,
//!     "avgResponseTime": 0,
//!     "lastUsed": null
//!   }
//! }
//! ```
//!
//! It returns `409` if the id is already taken and `400` if it is not valid.
//!
//! # List APIs
//!
//! `GET /api/v1/apis`
//!
//! It returns an array of the resources above, sorted by id.
//!
//! # Get an API
//!
//! `GET /api/v1/api/:api_id`
//!
//! ```bash
//! curl -s "http://127.0.0.1:1212/api/v1/api/weather-api?token=MyAccessToken"
//! ```
//!
//! After some playground usage the `playgroundStats` look like this:
//!
//! ```json
//! {
//!   "totalRequests": 3,
//!   "totalErrors": 1,
//!   "avgResponseTime": 120,
//!   "lastUsed": "2026-10-19T10:15:42.081Z"
//! }
//! ```
//!
//! It returns `404` if there is no API with that id.
//!
//! # Enable the playground for an API
//!
//! `POST /api/v1/api/:api_id/playground`
//!
//! ```bash
//! curl -s -X POST "http://127.0.0.1:1212/api/v1/api/weather-api/playground?token=MyAccessToken"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "status": "ok"
//! }
//! ```
//!
//! # Disable the playground for an API
//!
//! `DELETE /api/v1/api/:api_id/playground`
//!
//! After this, playground requests for the API are refused with `403`.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
