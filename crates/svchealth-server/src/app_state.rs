//! Shared application state for the health server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<ServerConfig>,
    registry: Arc<Registry>,
}

impl AppState {
    pub fn new(cfg: ServerConfig, registry: Arc<Registry>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            registry,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }
}
