//! Shared node state.
//!
//! Built once at startup: collect plugins, build catalogs, generate the
//! script settings and resolve them against the configured overrides. Any
//! failure here is fatal; there is no partially usable policy table.

use std::collections::BTreeMap;
use std::sync::Arc;

use scriptgate_core::error::Result;

use crate::config::NodeConfig;
use crate::plugin::{ConfiguredPlugin, NativeEnginePlugin, NativeScriptFactory, PluginSet};
use crate::policy::keys::SCRIPT_PREFIX;
use crate::policy::{ScriptModes, ScriptSettings};
use crate::settings::OverrideStore;

#[derive(Clone)]
pub struct NodeState {
    inner: Arc<NodeStateInner>,
}

struct NodeStateInner {
    modes: ScriptModes,
    native_scripts: BTreeMap<String, Arc<dyn NativeScriptFactory>>,
    plugins: Vec<String>,
}

impl NodeState {
    /// Built-in native engine plus every plugin declared in config.
    pub fn new(cfg: &NodeConfig) -> Result<Self> {
        let mut plugins = PluginSet::new();
        plugins.register(Arc::new(NativeEnginePlugin));
        for p in &cfg.plugins {
            plugins.register(Arc::new(ConfiguredPlugin::from(p)));
        }
        Self::with_plugins(cfg, plugins)
    }

    /// Build from an explicit plugin set (embedding, tests).
    pub fn with_plugins(cfg: &NodeConfig, plugins: PluginSet) -> Result<Self> {
        // 1) Catalogs
        let languages = plugins.language_catalog()?;
        let contexts = plugins.context_registry()?;
        let native_scripts = plugins.native_scripts()?;

        // 2) Settings definitions
        let settings = ScriptSettings::builder()
            .languages(languages)
            .contexts(contexts)
            .build()?;

        // 3) Resolve against overrides
        let overrides = cfg.overrides()?;
        for key in overrides.keys() {
            if !key.starts_with(SCRIPT_PREFIX) {
                tracing::warn!(setting = %key, "ignoring setting outside the script namespace");
            }
        }
        let modes = settings.resolve(&overrides)?;

        if let Some(backend) = modes.languages().template_backend() {
            tracing::info!(lang = backend.name(), "template backend registered");
        }

        let plugin_names = plugins.plugin_names().into_iter().map(str::to_string).collect();

        Ok(Self {
            inner: Arc::new(NodeStateInner {
                modes,
                native_scripts,
                plugins: plugin_names,
            }),
        })
    }

    pub fn modes(&self) -> &ScriptModes {
        &self.inner.modes
    }

    pub fn plugins(&self) -> &[String] {
        &self.inner.plugins
    }

    pub fn native_script(&self, name: &str) -> Option<Arc<dyn NativeScriptFactory>> {
        self.inner.native_scripts.get(name).cloned()
    }

    pub fn native_script_names(&self) -> Vec<&str> {
        self.inner.native_scripts.keys().map(String::as_str).collect()
    }

    pub fn native_scripts(&self) -> impl Iterator<Item = &Arc<dyn NativeScriptFactory>> {
        self.inner.native_scripts.values()
    }
}
