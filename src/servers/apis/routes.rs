//! API routes.
//!
//! It loads all the API routes for all API versions. The administration
//! routes are wrapped with the authentication middleware, the playground and
//! health check routes are public.
//!
//! All the API routes have the `/api` prefix and the version number as the
//! first path segment. For example: `/api/v1/playground/proxy`.
use std::sync::Arc;
use std::time::Duration;

use api_hub_configuration::AccessTokens;
use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use axum::response::Response;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::compression::CompressionLayer;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{info, Level, Span};
use uuid::Uuid;

use super::v1;
use super::v1::context::health_check::handlers::health_check_handler;
use super::v1::middlewares::auth::State;
use crate::core::Playground;

/// Add all API routes to the router.
#[allow(clippy::needless_pass_by_value)]
pub fn router(playground: Arc<Playground>, access_tokens: Arc<AccessTokens>) -> Router {
    let router = Router::new();

    let api_url_prefix = "/api";

    let router = v1::routes::add(api_url_prefix, router, playground.clone());

    let state = State { access_tokens };

    let router = router.layer(middleware::from_fn_with_state(state, v1::middlewares::auth::auth));

    v1::routes::add_public(api_url_prefix, router, playground)
        .route(&format!("{api_url_prefix}/health_check"), get(health_check_handler))
        .layer(CompressionLayer::new())
        .layer(PropagateHeaderLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(log_request)
                .on_response(log_response),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), RequestIdGenerator))
}

const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn log_request(request: &Request<Body>, _span: &Span) {
    info!(
        target: "API",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request.headers()),
        "request"
    );
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    info!(
        target: "API",
        latency = %latency.as_millis(),
        status = %response.status(),
        request_id = %request_id(response.headers()),
        "response"
    );
}

#[derive(Clone, Default)]
struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string()).ok().map(RequestId::new)
    }
}
