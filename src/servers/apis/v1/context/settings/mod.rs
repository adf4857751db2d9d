//! Settings API context.
//!
//! This API context is responsible for the global playground toggle. When
//! the toggle is off, every playground request for a listed API is refused
//! with a maintenance message. A missing toggle means the playground is
//! enabled.
//!
//! All the endpoints require a token.
//!
//! # Endpoints
//!
//! - [Get the global toggle](#get-the-global-toggle)
//! - [Enable the playground](#enable-the-playground)
//! - [Disable the playground](#disable-the-playground)
//! - [Reset the global toggle](#reset-the-global-toggle)
//!
//! # Get the global toggle
//!
//! `GET /api/v1/settings/playground`
//!
//! ```bash
//! curl -s "http://127.0.0.1:1212/api/v1/settings/playground?token=MyAccessToken"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "key": "GLOBAL_PLAYGROUND_ENABLED",
//!   "value": false,
//!   "enabled": false
//! }
//! ```
//!
//! The `value` is `null` when the toggle has never been set. Only a JSON
//! `false` value disables the playground.
//!
//! # Enable the playground
//!
//! `POST /api/v1/settings/playground`
//!
//! # Disable the playground
//!
//! `DELETE /api/v1/settings/playground`
//!
//! ```bash
//! curl -s -X DELETE "http://127.0.0.1:1212/api/v1/settings/playground?token=MyAccessToken"
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
//! # Reset the global toggle
//!
//! `POST /api/v1/settings/playground/reset`
//!
//! It removes the toggle, so the playground is enabled.
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
