// Server module entry point
// Listener setup, accept loop with a bounded worker pool, and shutdown

pub mod connection;
pub mod listener;
pub mod signal;

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{Notify, Semaphore};

use crate::config::AppState;
use crate::logger;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The accept loop and its listening socket. Failure to bind is the only
/// fatal startup error; everything after that is per-connection.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the listening socket for the configured address.
    pub fn bind(state: Arc<AppState>) -> Result<Self, ServerError> {
        let addr = state
            .config
            .get_socket_addr()
            .map_err(ServerError::InvalidAddr)?;
        let listener =
            listener::create_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self { listener, state })
    }

    /// The address actually bound, useful when the configured port is 0.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until the shutdown signal fires, handing each to
    /// a worker drawn from a bounded pool. When every worker is busy the
    /// accept loop waits for a free permit, so excess connections queue in
    /// the listen backlog instead of being rejected. The permit wait races
    /// against the shutdown signal, so a saturated pool cannot delay
    /// shutdown.
    ///
    /// On shutdown the listener is dropped, so the loop exits promptly and
    /// no further connections are accepted; in-flight workers finish on
    /// their own.
    pub async fn serve(self, shutdown: Arc<Notify>) -> Result<(), ServerError> {
        let workers = Arc::new(Semaphore::new(self.state.config.server.workers));

        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            let permit = tokio::select! {
                                permit = Arc::clone(&workers).acquire_owned() => {
                                    let Ok(permit) = permit else { break };
                                    permit
                                }
                                () = shutdown.notified() => {
                                    logger::log_warning("Shutdown requested, closing listener");
                                    break;
                                }
                            };
                            let state = Arc::clone(&self.state);
                            tokio::spawn(async move {
                                connection::serve_connection(stream, peer_addr, &state).await;
                                drop(permit);
                            });
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                () = shutdown.notified() => {
                    logger::log_warning("Shutdown requested, closing listener");
                    break;
                }
            }
        }

        Ok(())
    }
}
