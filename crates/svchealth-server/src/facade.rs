//! Process-wide registry with free-function entry points.
//!
//! Every entry point sanitizes `name` and `namespace` with the currently
//! installed [`NameSanitizer`](svchealth_core::sanitize::NameSanitizer) and
//! then delegates to the singleton [`Registry`]. Hosts that manage their own
//! `Registry` value can ignore this module.

use std::sync::{Arc, LazyLock};

use axum::{routing::any, routing::MethodRouter, Router};

use svchealth_core::error::Result;
use svchealth_core::sanitize::sanitize;
use svchealth_core::state::ServiceStatus;

use crate::ops;
use crate::registry::{HealthRegistry, Registry};

pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

static DEFAULT_REGISTRY: LazyLock<Arc<Registry>> = LazyLock::new(|| Arc::new(Registry::new()));

/// The process-wide registry.
pub fn registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

pub fn ensure_service(name: &str, namespace: &str) -> Result<bool> {
    DEFAULT_REGISTRY.ensure_service(&sanitize(name), &sanitize(namespace))
}

pub fn service_up(name: &str, namespace: &str) {
    DEFAULT_REGISTRY.service_up(&sanitize(name), &sanitize(namespace));
}

pub fn service_down(name: &str, namespace: &str) {
    DEFAULT_REGISTRY.service_down(&sanitize(name), &sanitize(namespace));
}

pub fn clear_items() {
    DEFAULT_REGISTRY.clear_items();
}

pub fn snapshot() -> Vec<ServiceStatus> {
    DEFAULT_REGISTRY.snapshot()
}

/// Liveness handler bound to the process-wide registry.
pub fn health_check_handler() -> MethodRouter {
    any(|| async { ops::liveness_response(&DEFAULT_REGISTRY) })
}

/// Scrape handler bound to the process-wide registry.
pub fn scrape_handler() -> MethodRouter {
    any(|| async { ops::scrape_response(&DEFAULT_REGISTRY) })
}

/// Both handlers mounted at their default paths.
pub fn router() -> Router {
    Router::new()
        .route(DEFAULT_HEALTH_PATH, health_check_handler())
        .route(DEFAULT_METRICS_PATH, scrape_handler())
}
