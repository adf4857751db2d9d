//! A local origin server for the playground requests.
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::json;
use tokio::task::JoinHandle;

/// The slow endpoint answers after this delay, longer than the timeout of
/// the ephemeral configuration.
pub const SLOW_ENDPOINT_DELAY: Duration = Duration::from_secs(5);

pub struct Origin {
    pub address: SocketAddr,
    task: JoinHandle<()>,
}

impl Origin {
    /// It starts the origin on a free port.
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        Self { address, task }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}/forecast")
}

fn router() -> Router {
    Router::new()
        .route("/forecast", get(forecast))
        .route("/text", get(text))
        .route("/failure", get(failure))
        .route("/slow", get(slow))
        .route("/echo", any(echo))
}

async fn forecast() -> impl IntoResponse {
    ([("x-origin", "local")], Json(json!({ "temperature": 21 })))
}

async fn text() -> &'static str {
    "plain text"
}

async fn failure() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" })))
}

async fn slow() -> &'static str {
    tokio::time::sleep(SLOW_ENDPOINT_DELAY).await;
    "too late"
}

/// It answers with what it received.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_owned);

    Json(json!({
        "method": method.as_str(),
        "contentType": header("content-type"),
        "custom": header("x-custom"),
        "userAgent": header("user-agent"),
        "body": body,
    }))
}
