//! API routes for the [`api`](crate::servers::apis::v1::context::api) API context.
//!
//! - `POST /apis`
//! - `GET /apis`
//! - `GET /api/:api_id`
//! - `POST /api/:api_id/playground`
//! - `DELETE /api/:api_id/playground`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::api).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    disable_api_playground_handler, enable_api_playground_handler, get_api_handler, list_apis_handler, register_api_handler,
};
use crate::core::Playground;

/// It adds the routes to the router for the [`api`](crate::servers::apis::v1::context::api) API context.
pub fn add(prefix: &str, router: Router, playground: Arc<Playground>) -> Router {
    router
        .route(
            &format!("{prefix}/apis"),
            get(list_apis_handler)
                .post(register_api_handler)
                .with_state(playground.clone()),
        )
        .route(&format!("{prefix}/api/:api_id"), get(get_api_handler).with_state(playground.clone()))
        .route(
            &format!("{prefix}/api/:api_id/playground"),
            post(enable_api_playground_handler)
                .delete(disable_api_playground_handler)
                .with_state(playground),
        )
}
