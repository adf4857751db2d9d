//! API responses for the [`api`](crate::servers::apis::v1::context::api) API context.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::Api;
use crate::core::api::ApiEntity;
use crate::core::error::Error;
use crate::servers::apis::v1::responses::{message_response, not_found_response, unhandled_rejection_response};

/// `200` response that contains an array of [`Api`] resources as json.
#[must_use]
pub fn api_list_response(apis: Vec<ApiEntity>) -> Response {
    Json(apis.into_iter().map(Api::from).collect::<Vec<_>>()).into_response()
}

/// `200` response that contains the [`Api`] resource as json.
#[must_use]
pub fn api_response(api: ApiEntity) -> Response {
    Json(Api::from(api)).into_response()
}

/// It maps an administration error to a response:
///
/// - `404` if there is no API with the given id.
/// - `409` if the id of a new API is taken.
/// - `500` with the error in debug format otherwise.
#[must_use]
pub fn failed_api_operation_response(action: &str, error: &Error) -> Response {
    match error {
        Error::ApiNotFound { .. } => not_found_response(&error.to_string()),
        Error::ApiAlreadyExists { .. } => message_response(StatusCode::CONFLICT, &error.to_string()),
        _ => unhandled_rejection_response(format!("failed to {action}: {error}")),
    }
}
