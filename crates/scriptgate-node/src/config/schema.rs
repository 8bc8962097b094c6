use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;
use scriptgate_core::error::{Result, ScriptGateError};

use crate::settings::Settings;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub version: u32,

    #[serde(default)]
    pub node: NodeSection,

    #[serde(default)]
    pub plugins: Vec<PluginConfig>,

    /// Operator overrides; nested maps flatten to dotted names.
    #[serde(default)]
    pub settings: serde_yaml::Value,
}

impl NodeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScriptGateError::UnsupportedVersion);
        }

        self.node.validate()?;

        let mut names = HashSet::new();
        for p in &self.plugins {
            if p.name.is_empty() {
                return Err(ScriptGateError::BadRequest("plugins[].name must not be empty".into()));
            }
            if !names.insert(p.name.as_str()) {
                return Err(ScriptGateError::BadRequest(format!(
                    "plugin [{}] is listed more than once",
                    p.name
                )));
            }
        }

        self.overrides()?;
        Ok(())
    }

    /// Parsed override store.
    pub fn overrides(&self) -> Result<Settings> {
        Settings::from_yaml(&self.settings)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl NodeSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ScriptGateError::BadRequest(format!("node.listen must be a valid socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:9280".into()
}

/// Plugin declared in config. Every hook is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    pub name: String,
    #[serde(default)]
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub template_backend: Option<EngineConfig>,
    #[serde(default)]
    pub context: Option<ContextConfig>,
    #[serde(default)]
    pub native_scripts: Vec<NativeScriptConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub lang: String,
    #[serde(default)]
    pub default_inline_enabled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    pub operation: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NativeScriptConfig {
    pub name: String,
    #[serde(default)]
    pub needs_scores: bool,
}
