//! Listener setup and serve loop.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::app::{self, SharedStore};
use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// An unbound server: configuration plus the store its handlers share.
pub struct Server {
    config: ServerConfig,
    store: SharedStore,
}

impl Server {
    pub fn new(config: ServerConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    /// Bind the listener and build the router.
    pub async fn bind(self) -> Result<BoundServer, ServerError> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(BoundServer {
            listener,
            local_addr,
            app: app::build_app(self.store),
        })
    }
}

/// A server whose listener is already bound; `local_addr` is the real port.
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until the task is dropped or the listener fails.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.local_addr, "listening");
        axum::serve(self.listener, self.app).await?;
        Ok(())
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(addr = %self.local_addr, "listening");
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;
        Ok(())
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stocklist_inventory::InMemoryItemStore;

    use super::*;

    #[tokio::test]
    async fn bind_reports_the_assigned_port() {
        let server = Server::new(ServerConfig::ephemeral(), Arc::new(InMemoryItemStore::new()))
            .bind()
            .await
            .unwrap();

        assert_ne!(server.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn bind_fails_when_port_is_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = Server::new(ServerConfig::new(addr), Arc::new(InMemoryItemStore::new()))
            .bind()
            .await
            .err()
            .unwrap();

        assert!(matches!(err, ServerError::Bind { addr: a, .. } if a == addr));
    }

    #[tokio::test]
    async fn run_until_returns_once_signalled() {
        let server = Server::new(ServerConfig::ephemeral(), Arc::new(InMemoryItemStore::new()))
            .bind()
            .await
            .unwrap();

        server.run_until(async {}).await.unwrap();
    }
}
