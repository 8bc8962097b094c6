//! Axum router wiring for the read-only query surface.
//!
//! Unknown paths fall through to `ops::not_found` so every non-2xx answer
//! carries the `{ "error": { code, reason } }` body.

use axum::{routing::get, Router};

use crate::{app_state::NodeState, ops};

pub fn build_router(state: NodeState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/v1/script_modes", get(ops::script_modes))
        .route("/v1/script_modes/check", get(ops::check))
        .fallback(ops::not_found)
        .with_state(state)
}
