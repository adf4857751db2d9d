//! API handlers for the [`api`](crate::servers::apis::v1::context::api) API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use uuid::Uuid;

use super::forms::RegisterApiForm;
use super::responses::{api_list_response, api_response, failed_api_operation_response};
use crate::core::api::ApiId;
use crate::core::Playground;
use crate::servers::apis::v1::responses::{invalid_api_id_param_response, ok_response};
use crate::servers::apis::ApiIdParam;

/// It handles the request to register a new API.
///
/// It returns:
///
/// - `200` response with the new [`Api`](super::resources::Api) resource in json.
/// - `400` if the id is not valid.
/// - `409` if there is already an API with the same id.
/// - `500` with serialized error in debug format if the API could not be stored.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api#register-an-api)
/// for more information about this endpoint.
pub async fn register_api_handler(State(playground): State<Arc<Playground>>, Json(form): Json<RegisterApiForm>) -> Response {
    let id = form.opt_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let api_id = match ApiId::from_str(&id) {
        Ok(api_id) => api_id,
        Err(_) => return invalid_api_id_param_response(&id),
    };

    match playground.register_api(api_id, &form.name) {
        Ok(api) => api_response(api),
        Err(e) => failed_api_operation_response("register api", &e),
    }
}

/// It handles the request to list the APIs.
///
/// It returns a `200` response with an array of [`Api`](super::resources::Api)
/// resources in json.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api#list-apis)
/// for more information about this endpoint.
pub async fn list_apis_handler(State(playground): State<Arc<Playground>>) -> Response {
    match playground.get_apis() {
        Ok(apis) => api_list_response(apis),
        Err(e) => failed_api_operation_response("list apis", &e),
    }
}

/// It handles the request to get one API with its usage.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api#get-an-api)
/// for more information about this endpoint.
pub async fn get_api_handler(State(playground): State<Arc<Playground>>, Path(api_id): Path<ApiIdParam>) -> Response {
    match ApiId::from_str(&api_id.0) {
        Err(_) => invalid_api_id_param_response(&api_id.0),
        Ok(api_id) => match playground.get_api(&api_id) {
            Ok(api) => api_response(api),
            Err(e) => failed_api_operation_response("get api", &e),
        },
    }
}

/// It handles the request to enable the playground for an API.
///
/// It returns:
///
/// - `200` response with a [`ActionStatus::Ok`](crate::servers::apis::v1::responses::ActionStatus::Ok) in json.
/// - `404` if there is no API with that id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api#enable-the-playground-for-an-api)
/// for more information about this endpoint.
pub async fn enable_api_playground_handler(State(playground): State<Arc<Playground>>, Path(api_id): Path<ApiIdParam>) -> Response {
    set_api_playground_enabled(&playground, &api_id.0, true)
}

/// It handles the request to disable the playground for an API.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api#disable-the-playground-for-an-api)
/// for more information about this endpoint.
pub async fn disable_api_playground_handler(State(playground): State<Arc<Playground>>, Path(api_id): Path<ApiIdParam>) -> Response {
    set_api_playground_enabled(&playground, &api_id.0, false)
}

fn set_api_playground_enabled(playground: &Playground, api_id: &str, enabled: bool) -> Response {
    match ApiId::from_str(api_id) {
        Err(_) => invalid_api_id_param_response(api_id),
        Ok(api_id) => match playground.set_api_playground_enabled(&api_id, enabled) {
            Ok(()) => ok_response(),
            Err(e) => failed_api_operation_response("toggle the api playground", &e),
        },
    }
}
