//! API responses for the [`settings`](crate::servers::apis::v1::context::settings) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::PlaygroundSetting;
use crate::core::error::Error;
use crate::core::settings::Setting;
use crate::servers::apis::v1::responses::unhandled_rejection_response;

/// `200` response that contains the [`PlaygroundSetting`] resource as json.
#[must_use]
pub fn playground_setting_response(setting: Option<Setting>) -> Response {
    Json(PlaygroundSetting::from(setting)).into_response()
}

/// `500` error response when the global toggle cannot be read.
#[must_use]
pub fn failed_to_get_playground_setting_response(e: &Error) -> Response {
    unhandled_rejection_response(format!("failed to get playground setting: {e}"))
}

/// `500` error response when the global toggle cannot be changed.
#[must_use]
pub fn failed_to_set_playground_setting_response(e: &Error) -> Response {
    unhandled_rejection_response(format!("failed to set playground setting: {e}"))
}
