//! API routes for the [`settings`](crate::servers::apis::v1::context::settings) API context.
//!
//! - `GET /settings/playground`
//! - `POST /settings/playground`
//! - `DELETE /settings/playground`
//! - `POST /settings/playground/reset`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::settings).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    disable_playground_handler, enable_playground_handler, get_playground_setting_handler, reset_playground_setting_handler,
};
use crate::core::Playground;

/// It adds the routes to the router for the [`settings`](crate::servers::apis::v1::context::settings) API context.
pub fn add(prefix: &str, router: Router, playground: Arc<Playground>) -> Router {
    let prefix = format!("{prefix}/settings/playground");

    router
        .route(
            &prefix,
            get(get_playground_setting_handler)
                .post(enable_playground_handler)
                .delete(disable_playground_handler)
                .with_state(playground.clone()),
        )
        .route(&format!("{prefix}/reset"), post(reset_playground_setting_handler).with_state(playground))
}
