//! svchealth server
//!
//! Serves the liveness and scrape endpoints for the process-wide registry.
//! Usage: `svchealth-server [config.yaml]` (falls back to `SVCHEALTH_CONFIG`,
//! then `svchealth.yaml`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use svchealth_core::error::{Result, SvcHealthError};
use svchealth_core::sanitize::install_sanitizer;
use svchealth_server::{app_state::AppState, config, facade, router};

const DEFAULT_CONFIG_PATH: &str = "svchealth.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SVCHEALTH_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "svchealth-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let listen = cfg.server.listen_addr()?;

    install_sanitizer(cfg.sanitizer.build());
    for svc in &cfg.services {
        facade::ensure_service(&svc.name, &svc.namespace)?;
    }

    let state = AppState::new(cfg, facade::registry());
    let app = router::build_router(state);

    tracing::info!(%listen, "svchealth-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SvcHealthError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SvcHealthError::Internal(format!("server failed: {e}")))?;

    facade::clear_items();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
