//! scriptgate node
//!
//! - Load config (strict parsing + validate)
//! - Build catalogs from plugins and resolve script modes (fatal on error)
//! - Serve the resolved table read-only over HTTP

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use scriptgate_core::error::{Result, ScriptGateError};
use scriptgate_node::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "scriptgate-node failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(config::CONFIG_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.node.listen_addr()?;

    let state = app_state::NodeState::new(&cfg)?;
    tracing::info!(
        settings = state.modes().len(),
        plugins = state.plugins().len(),
        "script modes ready"
    );

    let app = router::build_router(state);

    tracing::info!(%listen, "scriptgate-node starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ScriptGateError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ScriptGateError::Internal(format!("server failed: {e}")))
}
