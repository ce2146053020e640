//! HTTP server lifecycle.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

/// Handle to a running API server.
pub struct ServerHandle {
    pub addr: SocketAddr,
    pub started_at: DateTime<Utc>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl ServerHandle {
    /// Signal graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Signal shutdown and wait for in-flight requests to finish.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("API server task failed: {e}");
            }
        }
    }
}

/// Bind `addr`, mount [`api_router`], and serve in a background task.
///
/// Port 0 binds an ephemeral port; the bound address is in the handle.
pub async fn start_server(ctx: ApiContext, addr: SocketAddr) -> Result<ServerHandle, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = api_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ServerHandle {
        addr,
        started_at: Utc::now(),
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    use crate::llm::MockLlmClient;

    fn test_ctx() -> ApiContext {
        ApiContext::new(Arc::new(MockLlmClient::new("{}")), "test-model")
    }

    fn localhost() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/api/v1/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        server.stop().await;
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");

        let url = format!("http://{}/nonexistent", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.stop().await;
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
    }
}
