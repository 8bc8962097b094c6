//! Setting keys for the four policy granularities.
//!
//! Keys are structurally distinct enum variants, so two different
//! granularities never compare equal. Their rendered names are also distinct
//! because context names may not be a source type or `engine` and ids may
//! not contain `.` (enforced by the catalogs).

use std::fmt;

use crate::catalog::{Language, ScriptContext, SourceType};

/// Namespace shared by every script-mode setting.
pub const SCRIPT_PREFIX: &str = "script.";
const ENGINE_SEGMENT: &str = "engine";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKey {
    /// `script.{type}`
    Type(SourceType),
    /// `script.{context}`
    Context(String),
    /// `script.engine.{lang}.{type}`
    LangType(String, SourceType),
    /// `script.engine.{lang}.{type}.{context}`
    LangTypeContext(String, SourceType, String),
}

impl PolicyKey {
    pub fn type_key(t: SourceType) -> Self {
        PolicyKey::Type(t)
    }

    pub fn context_key(c: &ScriptContext) -> Self {
        PolicyKey::Context(c.as_str().to_string())
    }

    pub fn lang_type_key(l: &Language, t: SourceType) -> Self {
        PolicyKey::LangType(l.name().to_string(), t)
    }

    pub fn lang_type_context_key(l: &Language, t: SourceType, c: &ScriptContext) -> Self {
        PolicyKey::LangTypeContext(l.name().to_string(), t, c.as_str().to_string())
    }

    /// Dotted name used to look the key up in an override store.
    pub fn setting_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKey::Type(t) => write!(f, "{SCRIPT_PREFIX}{t}"),
            PolicyKey::Context(c) => write!(f, "{SCRIPT_PREFIX}{c}"),
            PolicyKey::LangType(l, t) => write!(f, "{SCRIPT_PREFIX}{ENGINE_SEGMENT}.{l}.{t}"),
            PolicyKey::LangTypeContext(l, t, c) => {
                write!(f, "{SCRIPT_PREFIX}{ENGINE_SEGMENT}.{l}.{t}.{c}")
            }
        }
    }
}
