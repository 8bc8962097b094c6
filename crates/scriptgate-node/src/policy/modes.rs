//! Resolved script-mode table.
//!
//! Built once from `ScriptSettings::resolve` and never mutated, so it can be
//! shared through an `Arc` and read from any number of threads.

use std::collections::HashMap;

use serde::Serialize;
use scriptgate_core::error::{Result, ScriptGateError};

use crate::catalog::{ContextRegistry, LanguageCatalog, SourceType, NATIVE_LANG};

use super::keys::PolicyKey;

/// One resolved setting, as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSetting {
    pub key: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ScriptModes {
    table: HashMap<PolicyKey, bool>,
    languages: LanguageCatalog,
    contexts: ContextRegistry,
}

impl ScriptModes {
    pub(crate) fn new(
        table: HashMap<PolicyKey, bool>,
        languages: LanguageCatalog,
        contexts: ContextRegistry,
    ) -> Self {
        Self {
            table,
            languages,
            contexts,
        }
    }

    /// Whether a script in `lang`, from source `t`, may run in `context`.
    ///
    /// Native scripts are always allowed. Unregistered languages and
    /// contexts are denied; use `check` to tell those apart from an explicit
    /// deny.
    pub fn is_enabled(&self, lang: &str, t: SourceType, context: &str) -> bool {
        match self.check(lang, t, context) {
            Ok(enabled) => enabled,
            Err(e) => {
                tracing::debug!(
                    lang,
                    source = %t,
                    context,
                    error = %e,
                    "script mode lookup denied"
                );
                false
            }
        }
    }

    pub fn check(&self, lang: &str, t: SourceType, context: &str) -> Result<bool> {
        if lang == NATIVE_LANG {
            return Ok(true);
        }
        let l = self
            .languages
            .get(lang)
            .ok_or_else(|| ScriptGateError::UnknownLanguage(lang.to_string()))?;
        let c = self
            .contexts
            .get(context)
            .ok_or_else(|| ScriptGateError::UnknownContext(context.to_string()))?;
        let key = PolicyKey::lang_type_context_key(l, t, c);
        self.table
            .get(&key)
            .copied()
            .ok_or_else(|| ScriptGateError::Internal(format!("no resolved value for [{key}]")))
    }

    /// Coarse query for callers that only know the source type.
    pub fn is_type_enabled(&self, t: SourceType) -> bool {
        self.table.get(&PolicyKey::type_key(t)).copied().unwrap_or(false)
    }

    /// Coarse query for callers that only know the context.
    pub fn is_context_enabled(&self, context: &str) -> bool {
        self.contexts
            .get(context)
            .and_then(|c| self.table.get(&PolicyKey::context_key(c)))
            .copied()
            .unwrap_or(false)
    }

    /// Resolved value for a `(lang, type)` pair across all contexts.
    pub fn is_lang_type_enabled(&self, lang: &str, t: SourceType) -> Result<bool> {
        if lang == NATIVE_LANG {
            return Ok(true);
        }
        let l = self
            .languages
            .get(lang)
            .ok_or_else(|| ScriptGateError::UnknownLanguage(lang.to_string()))?;
        let key = PolicyKey::lang_type_key(l, t);
        self.table
            .get(&key)
            .copied()
            .ok_or_else(|| ScriptGateError::Internal(format!("no resolved value for [{key}]")))
    }

    /// Full table sorted by setting name.
    pub fn entries(&self) -> Vec<ResolvedSetting> {
        let mut out: Vec<ResolvedSetting> = self
            .table
            .iter()
            .map(|(k, v)| ResolvedSetting {
                key: k.setting_name(),
                enabled: *v,
            })
            .collect();
        out.sort_by(|a, b| a.key.cmp(&b.key));
        out
    }

    pub fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    pub fn contexts(&self) -> &ContextRegistry {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
