//! HTTP API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the HTTP API: the playground proxy endpoint and the
//! administration endpoints.
//!
//! > **NOTICE**: the API has different versions. API consumers can choose
//! > which version to use. The API version is part of the URL, for example:
//! > `http://localhost:1212/api/v1/playground/proxy`.
//!
//! The server is started on a new asynchronous task. The job returned here
//! waits until that task finishes, which happens after a shutdown signal.
//!
//! Refer to the [configuration documentation](https://docs.rs/api-hub-configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use api_hub_configuration::{AccessTokens, HttpApi};
use tokio::task::JoinHandle;
use tracing::error;

use crate::core;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// It returns `None` if the server could not be started, for example when
/// the bind address is already in use.
pub async fn start_job(config: &HttpApi, playground: Arc<core::Playground>, version: Version) -> Option<JoinHandle<()>> {
    let bind_to = config.bind_address;

    let access_tokens = Arc::new(config.access_tokens.clone());

    match version {
        Version::V1 => start_v1(bind_to, playground, access_tokens).await,
    }
}

async fn start_v1(socket: SocketAddr, playground: Arc<core::Playground>, access_tokens: Arc<AccessTokens>) -> Option<JoinHandle<()>> {
    let server = match ApiServer::new(Launcher::new(socket)).start(playground, access_tokens).await {
        Ok(server) => server,
        Err(err) => {
            error!(target: "API", %socket, %err, "unable to start the HTTP API");
            return None;
        }
    };

    Some(tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        if let Err(err) = server.state.task.await {
            error!(target: "API", %err, "HTTP API task failed");
        }
    }))
}
