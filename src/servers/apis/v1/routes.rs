//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{api, playground, settings};
use crate::core::Playground;

/// Add the administration routes for the v1 API.
pub fn add(prefix: &str, router: Router, playground: Arc<Playground>) -> Router {
    let v1_prefix = format!("{prefix}/v1");
    let router = api::routes::add(&v1_prefix, router, playground.clone());
    settings::routes::add(&v1_prefix, router, playground)
}

/// Add the public routes for the v1 API. They do not require a token.
pub fn add_public(prefix: &str, router: Router, playground: Arc<Playground>) -> Router {
    let v1_prefix = format!("{prefix}/v1");
    playground::routes::add(&v1_prefix, router, playground)
}
