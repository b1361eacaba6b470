use std::sync::Arc;

use docshelf_storage::DocStorage;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Shared application state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<DocStorage>,
}

/// docshelf HTTP server.
pub struct DocServer {
    config: ServerConfig,
    state: AppState,
}

impl DocServer {
    pub fn new(config: ServerConfig, storage: Arc<DocStorage>) -> Self {
        Self {
            config,
            state: AppState { storage },
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("docshelf server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
