//! API handlers for the [`settings`](crate::servers::apis::v1::context::settings) API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use super::responses::{
    failed_to_get_playground_setting_response, failed_to_set_playground_setting_response, playground_setting_response,
};
use crate::core::Playground;
use crate::servers::apis::v1::responses::ok_response;

/// It handles the request to read the global playground toggle.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::settings#get-the-global-toggle)
/// for more information about this endpoint.
pub async fn get_playground_setting_handler(State(playground): State<Arc<Playground>>) -> Response {
    match playground.get_global_playground_setting() {
        Ok(setting) => playground_setting_response(setting),
        Err(e) => failed_to_get_playground_setting_response(&e),
    }
}

/// It handles the request to turn the global playground toggle on.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::settings#enable-the-playground)
/// for more information about this endpoint.
pub async fn enable_playground_handler(State(playground): State<Arc<Playground>>) -> Response {
    match playground.set_global_playground_enabled(true) {
        Ok(()) => ok_response(),
        Err(e) => failed_to_set_playground_setting_response(&e),
    }
}

/// It handles the request to turn the global playground toggle off.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::settings#disable-the-playground)
/// for more information about this endpoint.
pub async fn disable_playground_handler(State(playground): State<Arc<Playground>>) -> Response {
    match playground.set_global_playground_enabled(false) {
        Ok(()) => ok_response(),
        Err(e) => failed_to_set_playground_setting_response(&e),
    }
}

/// It handles the request to remove the global playground toggle.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::settings#reset-the-global-toggle)
/// for more information about this endpoint.
pub async fn reset_playground_setting_handler(State(playground): State<Arc<Playground>>) -> Response {
    match playground.remove_global_playground_setting() {
        Ok(()) => ok_response(),
        Err(e) => failed_to_set_playground_setting_response(&e),
    }
}
