//! Scripting extension point.
//!
//! Plugins contribute script engines, at most one template backend, native
//! scripts and custom execution contexts. The node collects them once at
//! startup into the catalogs the policy resolver is generated from.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use scriptgate_core::error::{Result, ScriptGateError};

use crate::catalog::{ContextPlugin, ContextRegistry, LanguageCatalog, NATIVE_LANG};
use crate::config::schema::PluginConfig;

/// Script engine contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDescriptor {
    pub lang: String,
    /// Whether non-file scripts in this language are allowed when nothing is
    /// configured.
    pub default_inline_enabled: bool,
}

/// Template backend contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBackend {
    pub lang: String,
    /// What the backend declares for itself. Templates are enabled by
    /// default regardless, so the catalog ignores this value.
    pub default_inline_enabled: bool,
}

/// Factory for a script implemented natively and invoked by name.
pub trait NativeScriptFactory: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Whether scripts built by this factory read document scores.
    fn needs_scores(&self) -> bool {
        false
    }
}

/// Extension point for plugins that add scripting functionality.
/// Every hook is optional.
pub trait ScriptPlugin: Send + Sync {
    fn name(&self) -> &str;

    fn script_engine(&self) -> Option<EngineDescriptor> {
        None
    }

    /// The node refuses to start if more than one plugin returns a backend.
    fn template_backend(&self) -> Option<TemplateBackend> {
        None
    }

    fn native_scripts(&self) -> Vec<Arc<dyn NativeScriptFactory>> {
        Vec::new()
    }

    fn custom_script_contexts(&self) -> Option<ContextPlugin> {
        None
    }
}

/// Built-in engine running native scripts. Its language is reserved and never
/// gets script settings.
pub struct NativeEnginePlugin;

impl ScriptPlugin for NativeEnginePlugin {
    fn name(&self) -> &str {
        "native-engine"
    }

    fn script_engine(&self) -> Option<EngineDescriptor> {
        Some(EngineDescriptor {
            lang: NATIVE_LANG.to_string(),
            default_inline_enabled: true,
        })
    }
}

/// Native script registered by name from configuration.
#[derive(Debug)]
pub struct NamedNativeScript {
    name: String,
    needs_scores: bool,
}

impl NativeScriptFactory for NamedNativeScript {
    fn name(&self) -> &str {
        &self.name
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}

/// Plugin described in the node config instead of compiled in.
#[derive(Debug)]
pub struct ConfiguredPlugin {
    name: String,
    engine: Option<EngineDescriptor>,
    template_backend: Option<TemplateBackend>,
    context_operation: Option<String>,
    native_scripts: Vec<Arc<NamedNativeScript>>,
}

impl From<&PluginConfig> for ConfiguredPlugin {
    fn from(cfg: &PluginConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            engine: cfg.engine.as_ref().map(|e| EngineDescriptor {
                lang: e.lang.clone(),
                default_inline_enabled: e.default_inline_enabled,
            }),
            template_backend: cfg.template_backend.as_ref().map(|b| TemplateBackend {
                lang: b.lang.clone(),
                default_inline_enabled: b.default_inline_enabled,
            }),
            context_operation: cfg.context.as_ref().map(|c| c.operation.clone()),
            native_scripts: cfg
                .native_scripts
                .iter()
                .map(|n| {
                    Arc::new(NamedNativeScript {
                        name: n.name.clone(),
                        needs_scores: n.needs_scores,
                    })
                })
                .collect(),
        }
    }
}

impl ScriptPlugin for ConfiguredPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn script_engine(&self) -> Option<EngineDescriptor> {
        self.engine.clone()
    }

    fn template_backend(&self) -> Option<TemplateBackend> {
        self.template_backend.clone()
    }

    fn native_scripts(&self) -> Vec<Arc<dyn NativeScriptFactory>> {
        self.native_scripts
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn NativeScriptFactory>)
            .collect()
    }

    fn custom_script_contexts(&self) -> Option<ContextPlugin> {
        self.context_operation
            .as_ref()
            .map(|op| ContextPlugin::new(self.name.clone(), op.clone()))
    }
}

/// Registered plugins, in registration order.
#[derive(Default)]
pub struct PluginSet {
    plugins: Vec<Arc<dyn ScriptPlugin>>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn register(&mut self, plugin: Arc<dyn ScriptPlugin>) {
        tracing::debug!(plugin = plugin.name(), "script plugin registered");
        self.plugins.push(plugin);
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Engines and the template backend as a language catalog.
    pub fn language_catalog(&self) -> Result<LanguageCatalog> {
        let mut builder = LanguageCatalog::builder();
        for p in &self.plugins {
            if let Some(engine) = p.script_engine() {
                builder = builder.engine(&engine.lang, engine.default_inline_enabled)?;
            }
        }
        for p in &self.plugins {
            if let Some(backend) = p.template_backend() {
                builder =
                    builder.template_backend(&backend.lang, backend.default_inline_enabled)?;
            }
        }
        Ok(builder.build())
    }

    /// Built-in contexts plus every plugin's custom context.
    pub fn context_registry(&self) -> Result<ContextRegistry> {
        ContextRegistry::new(self.plugins.iter().filter_map(|p| p.custom_script_contexts()))
    }

    /// Native script factories by name.
    pub fn native_scripts(&self) -> Result<BTreeMap<String, Arc<dyn NativeScriptFactory>>> {
        let mut out: BTreeMap<String, Arc<dyn NativeScriptFactory>> = BTreeMap::new();
        for p in &self.plugins {
            for factory in p.native_scripts() {
                let name = factory.name().to_string();
                if out.contains_key(&name) {
                    return Err(ScriptGateError::DuplicateNativeScript(name));
                }
                out.insert(name, factory);
            }
        }
        Ok(out)
    }
}
