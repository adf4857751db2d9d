use api_hub_playground::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, playground) = bootstrap::app::setup();

    let jobs = app::start(&config, playground).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("API Hub shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("API Hub successfully shutdown.");
        }
    }
}
