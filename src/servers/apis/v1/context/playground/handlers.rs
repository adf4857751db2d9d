//! API handlers for the [`playground`](crate::servers::apis::v1::context::playground)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use tracing::{debug, error};

use super::forms::ProxyForm;
use super::responses::{bad_gateway_response, forwarded_response, invalid_proxy_form_response, not_forwarded_response};
use crate::core::forwarder::ProxyOutcome;
use crate::core::Playground;
use crate::servers::apis::ApiIdParam;

/// It handles the request to forward a request to an origin.
///
/// It returns:
///
/// - `200` response with the [`Forwarded`](super::resources::Forwarded) origin answer in json.
/// - `502` response with the [`Unreachable`](super::resources::Unreachable) failure in json when the
///   request could not be sent or the origin could not be reached.
/// - `400`, `403` or `503` with a json message if the request was not forwarded.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::playground#proxy-a-request)
/// for more information about this endpoint.
pub async fn proxy_handler(State(playground): State<Arc<Playground>>, payload: Result<Json<ProxyForm>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(form)) => proxy(&playground, form, None).await,
        Err(rejection) => invalid_proxy_form_response(&rejection),
    }
}

/// Same as [`proxy_handler`] with the API id in the path.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::playground#proxy-a-request-for-a-listed-api)
/// for more information about this endpoint.
pub async fn proxy_for_api_handler(
    State(playground): State<Arc<Playground>>,
    Path(api_id): Path<ApiIdParam>,
    payload: Result<Json<ProxyForm>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(form)) => proxy(&playground, form, Some(&api_id.0)).await,
        Err(rejection) => invalid_proxy_form_response(&rejection),
    }
}

async fn proxy(playground: &Playground, form: ProxyForm, path_api_id: Option<&str>) -> Response {
    let request = form.into_proxy_request(path_api_id);

    match playground.proxy(&request).await {
        Ok(ProxyOutcome::Forwarded(response)) => forwarded_response(response),
        Ok(ProxyOutcome::BadGateway(bad_gateway)) => bad_gateway_response(bad_gateway),
        Err(err) => {
            if err.is_validation() || err.is_refusal() {
                debug!(target: "API", %err, "playground request not forwarded");
            } else {
                error!(target: "API", ?err, "playground request failed");
            }
            not_forwarded_response(&err)
        }
    }
}
