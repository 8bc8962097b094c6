//! Operational HTTP endpoints (read-only).
//!
//! - `/healthz`                 : liveness
//! - `/v1/script_modes`         : full resolved table
//! - `/v1/script_modes/check`   : one decision (`lang`, `type`, optional `context`)
//!
//! Any other path gets the same JSON error body as a failed query.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use scriptgate_core::error::{ErrorCode, ScriptGateError};

use crate::app_state::NodeState;
use crate::catalog::SourceType;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn script_modes(State(state): State<NodeState>) -> Response {
    let modes = state.modes();
    let languages: Vec<_> = modes
        .languages()
        .languages()
        .map(|l| {
            json!({
                "lang": l.name(),
                "default_enabled": l.default_enabled(),
                "template_backend": l.is_template_backend(),
            })
        })
        .collect();
    let contexts: Vec<&str> = modes.contexts().contexts().map(|c| c.as_str()).collect();
    let native_scripts: Vec<_> = state
        .native_scripts()
        .map(|s| json!({ "name": s.name(), "needs_scores": s.needs_scores() }))
        .collect();

    Json(json!({
        "languages": languages,
        "contexts": contexts,
        "native_scripts": native_scripts,
        "settings": modes.entries(),
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub lang: String,
    #[serde(rename = "type")]
    pub source: String,
    #[serde(default)]
    pub context: Option<String>,
}

pub async fn check(State(state): State<NodeState>, Query(params): Query<CheckParams>) -> Response {
    let modes = state.modes();
    let res = params.source.parse::<SourceType>().and_then(|t| match &params.context {
        Some(ctx) => modes.check(&params.lang, t, ctx),
        None => modes.is_lang_type_enabled(&params.lang, t),
    });

    match res {
        Ok(enabled) => Json(json!({
            "lang": params.lang,
            "type": params.source,
            "context": params.context,
            "enabled": enabled,
        }))
        .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Router fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    let body = json!({
        "error": {
            "code": ErrorCode::NotFound,
            "reason": format!("no handler for [{}]", uri.path()),
        }
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn error_response(e: &ScriptGateError) -> Response {
    let code = e.code();
    let status = match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": { "code": code, "reason": e.to_string() } }))).into_response()
}
