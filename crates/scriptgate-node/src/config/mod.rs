//! Node config loader (strict parsing).

pub mod schema;

use std::fs;

use scriptgate_core::error::{Result, ScriptGateError};

pub use schema::{NodeConfig, NodeSection, PluginConfig};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "SCRIPTGATE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "scriptgate.yaml";

pub fn load_from_file(path: &str) -> Result<NodeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ScriptGateError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<NodeConfig> {
    let cfg: NodeConfig = serde_yaml::from_str(s)
        .map_err(|e| ScriptGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
