//! API routes for the [`playground`](crate::servers::apis::v1::context::playground) API context.
//!
//! - `POST /playground/proxy`
//! - `POST /playground/proxy/:api_id`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::playground).
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::{proxy_for_api_handler, proxy_handler};
use crate::core::Playground;

/// It adds the routes to the router for the [`playground`](crate::servers::apis::v1::context::playground) API context.
pub fn add(prefix: &str, router: Router, playground: Arc<Playground>) -> Router {
    let prefix = format!("{prefix}/playground");

    router
        .route(&format!("{prefix}/proxy"), post(proxy_handler).with_state(playground.clone()))
        .route(&format!("{prefix}/proxy/:api_id"), post(proxy_for_api_handler).with_state(playground))
}
