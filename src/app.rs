//! API Hub playground application.
//!
//! The application starts the jobs configured for the domain layer. There
//! is only one job, the HTTP API, serving both the playground endpoint and
//! the administration endpoints.
//!
//! ```text
//! Delivery layer    Domain layer
//!
//!   HTTP API |> Core playground
//! ```
use std::sync::Arc;

use api_hub_configuration::Configuration;
use tokio::task::JoinHandle;
use tracing::info;

use crate::bootstrap::jobs::http_api;
use crate::{core, servers};

/// It starts all the application jobs and returns their handles.
pub async fn start(config: &Configuration, playground: Arc<core::Playground>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    info!("Configuration:\n{}", config.clone().mask_secrets().to_toml().unwrap_or_default());

    // Start HTTP API
    if let Some(job) = http_api::start_job(&config.http_api, playground.clone(), servers::apis::Version::V1).await {
        jobs.push(job);
    };

    jobs
}
