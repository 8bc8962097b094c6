//! Explicit operator overrides.
//!
//! The resolver only ever asks a store two things about a key: is it
//! explicitly set, and to what. `Settings` is the in-memory implementation
//! loaded from the node config.

use std::collections::BTreeMap;

use serde_yaml::Value;
use scriptgate_core::error::{Result, ScriptGateError};

/// Read-only key -> bool override source.
pub trait OverrideStore: Send + Sync {
    /// Explicit value for `key`, `None` when unset.
    fn get(&self, key: &str) -> Option<bool>;

    fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Every explicitly set key.
    fn keys(&self) -> Vec<&str>;
}

/// Flat dotted-name settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and embedding.
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from a YAML mapping. Nested maps flatten into dotted names, so
    /// `script: { inline: true }` and `script.inline: true` are the same
    /// setting; giving both is an error.
    pub fn from_yaml(root: &Value) -> Result<Self> {
        let mut out = Self::new();
        match root {
            Value::Null => {}
            Value::Mapping(_) => flatten("", root, &mut out.values)?,
            _ => {
                return Err(ScriptGateError::BadRequest(
                    "settings must be a mapping".into(),
                ))
            }
        }
        Ok(out)
    }
}

fn flatten(prefix: &str, v: &Value, out: &mut BTreeMap<String, bool>) -> Result<()> {
    match v {
        Value::Mapping(m) => {
            for (k, child) in m {
                let seg = match k {
                    Value::String(s) => s.clone(),
                    other => {
                        return Err(ScriptGateError::BadRequest(format!(
                            "setting name must be a string under [{prefix}], got {other:?}"
                        )))
                    }
                };
                let name = if prefix.is_empty() { seg } else { format!("{prefix}.{seg}") };
                flatten(&name, child, out)?;
            }
            Ok(())
        }
        leaf => {
            let b = parse_bool(prefix, leaf)?;
            if out.insert(prefix.to_string(), b).is_some() {
                return Err(ScriptGateError::BadRequest(format!(
                    "setting [{prefix}] is set more than once"
                )));
            }
            Ok(())
        }
    }
}

/// Booleans are strict: `true`/`false`, as YAML bools or strings.
fn parse_bool(key: &str, v: &Value) -> Result<bool> {
    match v {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(ScriptGateError::InvalidSettingValue(
            key.to_string(),
            format!("expected [true] or [false], got {other:?}"),
        )),
    }
}

impl OverrideStore for Settings {
    fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}
