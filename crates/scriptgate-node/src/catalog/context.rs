use std::collections::BTreeSet;
use std::fmt;

use scriptgate_core::error::{Result, ScriptGateError};

use super::{validate_identifier, SourceType};

/// Contexts every node knows about.
pub const BUILTIN_CONTEXTS: [&str; 4] = ["aggs", "search", "update", "ingest"];

/// Segment reserved for language-scoped settings (`script.engine.*`).
const RESERVED_ENGINE: &str = "engine";

/// Named operation domain a script runs in (e.g. `search`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptContext(String);

impl ScriptContext {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context contributed by a plugin. Registered as `{plugin}_{operation}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPlugin {
    pub plugin: String,
    pub operation: String,
}

impl ContextPlugin {
    pub fn new(plugin: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            operation: operation.into(),
        }
    }

    pub fn key(&self) -> String {
        format!("{}_{}", self.plugin, self.operation)
    }
}

/// Fixed set of execution contexts for the process lifetime.
#[derive(Debug, Clone)]
pub struct ContextRegistry {
    contexts: BTreeSet<ScriptContext>,
}

impl ContextRegistry {
    /// Built-in contexts plus the given plugin contexts.
    pub fn new(custom: impl IntoIterator<Item = ContextPlugin>) -> Result<Self> {
        let mut registry = Self {
            contexts: BTreeSet::new(),
        };
        for name in BUILTIN_CONTEXTS {
            registry.add(name.to_string())?;
        }
        for plugin in custom {
            if plugin.plugin.is_empty() || plugin.operation.is_empty() {
                return Err(ScriptGateError::InvalidIdentifier(
                    plugin.key(),
                    "plugin context needs both a plugin name and an operation",
                ));
            }
            registry.add(plugin.key())?;
        }
        Ok(registry)
    }

    fn add(&mut self, name: String) -> Result<()> {
        validate_identifier(&name)?;
        // context keys share the `script.` namespace with source types
        if name == RESERVED_ENGINE || SourceType::ALL.iter().any(|t| t.name() == name) {
            return Err(ScriptGateError::InvalidIdentifier(name, "reserved script context name"));
        }
        let ctx = ScriptContext(name);
        if self.contexts.contains(&ctx) {
            return Err(ScriptGateError::DuplicateContext(ctx.0));
        }
        self.contexts.insert(ctx);
        Ok(())
    }

    pub fn contexts(&self) -> impl Iterator<Item = &ScriptContext> {
        self.contexts.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ScriptContext> {
        self.contexts.iter().find(|c| c.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
