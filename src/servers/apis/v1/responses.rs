//! Common responses for the API v1 shared by all the contexts.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response status used when requests have only two possible results
/// `Ok` or `Error` and no data is returned.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionStatus<'a> {
    Ok,
    Err { reason: std::borrow::Cow<'a, str> },
}

/// Body of the responses that only carry a message for the client.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

// OK response

#[must_use]
pub fn ok_response() -> Response {
    (StatusCode::OK, Json(ActionStatus::Ok)).into_response()
}

// Error responses

#[must_use]
pub fn invalid_api_id_param_response(api_id: &str) -> Response {
    bad_request_response(&format!("Invalid URL: invalid api id param \"{api_id}\""))
}

#[must_use]
pub fn bad_request_response(body: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.to_owned(),
    )
        .into_response()
}

#[must_use]
pub fn not_found_response(body: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.to_owned(),
    )
        .into_response()
}

/// A json `{ "message": ... }` response with the given status code.
#[must_use]
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(Message::new(message))).into_response()
}

/// Plain text `500` response used for the failures the client cannot fix,
/// including the authentication failures.
#[must_use]
pub fn unhandled_rejection_response(reason: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Unhandled rejection: {:?}", ActionStatus::Err { reason: reason.into() }),
    )
        .into_response()
}
