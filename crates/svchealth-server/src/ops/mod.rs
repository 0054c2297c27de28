//! Operational HTTP endpoints.
//!
//! - liveness (`/health` by default): JSON array of every registered service,
//!   200 when all are Up (an empty registry included), 500 otherwise
//! - scrape (`/metrics` by default): Prometheus text format
//!
//! Neither endpoint mutates the registry.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;

use svchealth_core::state::all_up;

use crate::app_state::AppState;
use crate::registry::{HealthRegistry, Registry};

pub async fn healthz(State(state): State<AppState>) -> Response {
    liveness_response(&state.registry())
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    scrape_response(&state.registry())
}

/// Build the liveness response from the current registry state.
pub fn liveness_response(registry: &Registry) -> Response {
    let statuses = registry.snapshot();
    report_response(all_up(&statuses), &statuses)
}

/// JSON-encode `report` with 200 when `healthy`, 500 otherwise.
///
/// An encoding failure yields 500 with a plain-text diagnostic instead.
pub fn report_response<T: Serialize + ?Sized>(healthy: bool, report: &T) -> Response {
    let body = match serde_json::to_vec(report) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "liveness serialization failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("Failed to marshal service status: {e}"),
            )
                .into_response();
        }
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Encode every gauge owned by `registry` in the text exposition format.
pub fn scrape_response(registry: &Registry) -> Response {
    let encoder = TextEncoder::new();
    let families = registry.gather();

    let mut body = Vec::new();
    if let Err(e) = encoder.encode(&families, &mut body) {
        tracing::warn!(error = %e, "metrics encoding failed");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string())],
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        body,
    )
        .into_response()
}
