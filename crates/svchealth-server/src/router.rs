//! Axum router wiring.
//!
//! Both endpoints answer any HTTP method.

use axum::{routing::any, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let health_path = state.cfg().server.health_path.clone();
    let metrics_path = state.cfg().server.metrics_path.clone();

    Router::new()
        .route(&health_path, any(ops::healthz))
        .route(&metrics_path, any(ops::metrics))
        .with_state(state)
}
