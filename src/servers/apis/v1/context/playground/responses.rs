//! API responses for the [`playground`](crate::servers::apis::v1::context::playground)
//! API context.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::{Forwarded, Unreachable};
use crate::core::error::Error;
use crate::core::forwarder::{BadGateway, ForwardedResponse};
use crate::servers::apis::v1::responses::message_response;

/// `200` response with the origin answer, whatever the origin status was.
#[must_use]
pub fn forwarded_response(response: ForwardedResponse) -> Response {
    (StatusCode::OK, Json(Forwarded::from(response))).into_response()
}

/// `502` response when the origin could not be reached.
#[must_use]
pub fn bad_gateway_response(bad_gateway: BadGateway) -> Response {
    (StatusCode::BAD_GATEWAY, Json(Unreachable::from(bad_gateway))).into_response()
}

/// `400` response when the body is not a valid proxy request.
#[must_use]
pub fn invalid_proxy_form_response(rejection: &JsonRejection) -> Response {
    message_response(StatusCode::BAD_REQUEST, &format!("Invalid request body: {}", rejection.body_text()))
}

/// Response for a request the playground did not forward.
#[must_use]
pub fn not_forwarded_response(error: &Error) -> Response {
    let status = if error.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        match error {
            Error::PlaygroundUnderMaintenance { .. } | Error::PlaygroundDisabledByOwner { .. } => StatusCode::FORBIDDEN,
            Error::ApiLookupFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    };

    message_response(status, &error.to_string())
}
