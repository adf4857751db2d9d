//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use api_hub_configuration::AccessTokens;
use derive_more::Constructor;
use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{error, info};

use super::routes::router;
use crate::core::Playground;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Time given to the open connections to finish after a halt signal.
const GRACE_PERIOD: Duration = Duration::from_secs(90);

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Unable to bind to the socket {addr}: {source}")]
    UnableToBind {
        addr: SocketAddr,
        source: Arc<std::io::Error>,
    },

    #[error("The launcher did not report the bound address")]
    UnableToGetBoundAddress,

    #[error("Unable to send the halting message, the server already stopped")]
    UnableToSendHaltingMessage,

    #[error("Unable to join the server task: {source}")]
    UnableToJoinTask { source: Arc<tokio::task::JoinError> },
}

/// A stopped API server.
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
pub type RunningApiServer = ApiServer<Running>;

/// A struct responsible for starting and stopping an API server with a
/// specific configuration and keeping track of the started server.
///
/// It's a state machine that can be in one of two
/// states: `Stopped` or `Running`.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    pub state: S,
}

/// The `Stopped` state of the `ApiServer` struct.
pub struct Stopped {
    launcher: Launcher,
}

/// The `Running` state of the `ApiServer` struct.
pub struct Running {
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the API server with the given configuration.
    ///
    /// # Errors
    ///
    /// It would return an error if the socket cannot be bound or no
    /// `SocketAddr` is returned after launching the server.
    pub async fn start(self, playground: Arc<Playground>, access_tokens: Arc<AccessTokens>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Result<SocketAddr, Error>>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(playground, access_tokens, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = rx_start.await.map_err(|_| Error::UnableToGetBoundAddress)??;

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// Stops the API server.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage)?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::UnableToJoinTask { source: Arc::new(err) })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Debug, Clone, Copy)]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// The bound address, or the error binding the socket, is sent through
    /// `tx_start`.
    fn start(
        &self,
        playground: Arc<Playground>,
        access_tokens: Arc<AccessTokens>,
        tx_start: Sender<Result<SocketAddr, Error>>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let (socket, address) = match self.bind() {
            Ok(bound) => bound,
            Err(err) => {
                let _ = tx_start.send(Err(err));
                return futures::future::ready(()).boxed();
            }
        };

        let router = router(playground, access_tokens);

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down http server on socket address: {address}"),
            GRACE_PERIOD,
        ));

        let running = axum_server::from_tcp(socket)
            .handle(handle)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .map(|result| {
                if let Err(err) = result {
                    error!(target: "API", %err, "HTTP API stopped with an error");
                }
            });

        info!(target: "API", "API server started on http://{}", address);

        if tx_start.send(Ok(address)).is_err() {
            error!(target: "API", "the API server owner went away before the server started");
        }

        running.boxed()
    }

    fn bind(&self) -> Result<(std::net::TcpListener, SocketAddr), Error> {
        let to_bind_error = |source: std::io::Error| Error::UnableToBind {
            addr: self.bind_to,
            source: Arc::new(source),
        };

        let socket = std::net::TcpListener::bind(self.bind_to).map_err(to_bind_error)?;
        socket.set_nonblocking(true).map_err(to_bind_error)?;
        let address = socket.local_addr().map_err(to_bind_error)?;

        Ok((socket, address))
    }
}
