//! Script-mode setting generation and resolution.
//!
//! Every setting carries an explicit fallback chain instead of a closure:
//! its own key first, then the chain in order, then a static default. The
//! chains encode the precedence
//!
//! ```text
//! lang+type+context > lang+type > context > type > built-in default
//! ```
//!
//! Context is consulted before type: disabling a whole context (e.g.
//! `script.search: false`) overrides a general `script.inline: true`.

use std::collections::{HashMap, HashSet};

use scriptgate_core::error::{Result, ScriptGateError};

use crate::catalog::{ContextRegistry, Language, LanguageCatalog, SourceType};
use crate::settings::OverrideStore;

use super::keys::{PolicyKey, SCRIPT_PREFIX};
use super::modes::ScriptModes;

/// One registered boolean setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSetting {
    key: PolicyKey,
    fallbacks: Vec<PolicyKey>,
    default: bool,
}

impl ScriptSetting {
    fn new(key: PolicyKey, fallbacks: Vec<PolicyKey>, default: bool) -> Self {
        Self {
            key,
            fallbacks,
            default,
        }
    }

    pub fn key(&self) -> &PolicyKey {
        &self.key
    }

    /// Keys consulted, in order, when this setting's own key is unset.
    pub fn fallbacks(&self) -> &[PolicyKey] {
        &self.fallbacks
    }

    /// Value when neither the key nor any fallback is set.
    pub fn static_default(&self) -> bool {
        self.default
    }

    /// Effective default: first explicit fallback, else the static default.
    pub fn default_value(&self, store: &dyn OverrideStore) -> bool {
        self.fallbacks
            .iter()
            .find_map(|k| store.get(&k.setting_name()))
            .unwrap_or(self.default)
    }

    pub fn resolve(&self, store: &dyn OverrideStore) -> bool {
        store
            .get(&self.key.setting_name())
            .unwrap_or_else(|| self.default_value(store))
    }
}

/// All script-mode settings for a set of catalogs.
#[derive(Debug, Clone)]
pub struct ScriptSettings {
    settings: Vec<ScriptSetting>,
    index: HashMap<PolicyKey, usize>,
    languages: LanguageCatalog,
    contexts: ContextRegistry,
}

impl ScriptSettings {
    pub fn builder() -> ScriptSettingsBuilder {
        ScriptSettingsBuilder::default()
    }

    /// Settings in registration order: types, contexts, then per language.
    pub fn settings(&self) -> &[ScriptSetting] {
        &self.settings
    }

    pub fn get(&self, key: &PolicyKey) -> Option<&ScriptSetting> {
        self.index.get(key).and_then(|&i| self.settings.get(i))
    }

    pub fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    pub fn contexts(&self) -> &ContextRegistry {
        &self.contexts
    }

    /// Resolve every setting against `store` into an immutable table.
    ///
    /// Fails if the store sets a `script.*` key that no setting owns.
    pub fn resolve(&self, store: &dyn OverrideStore) -> Result<ScriptModes> {
        let known: HashSet<String> = self.settings.iter().map(|s| s.key.setting_name()).collect();
        for key in store.keys() {
            if key.starts_with(SCRIPT_PREFIX) && !known.contains(key) {
                return Err(ScriptGateError::UnknownSetting(key.to_string()));
            }
        }

        let table: HashMap<PolicyKey, bool> = self
            .settings
            .iter()
            .map(|s| (s.key.clone(), s.resolve(store)))
            .collect();

        tracing::info!(
            settings = table.len(),
            languages = self.languages.len(),
            contexts = self.contexts.len(),
            "script modes resolved"
        );

        Ok(ScriptModes::new(table, self.languages.clone(), self.contexts.clone()))
    }

    fn register(&mut self, setting: ScriptSetting) -> Result<()> {
        if self.index.contains_key(&setting.key) {
            return Err(ScriptGateError::DuplicateSetting(setting.key.setting_name()));
        }
        self.index.insert(setting.key.clone(), self.settings.len());
        self.settings.push(setting);
        Ok(())
    }

    fn register_language(&mut self, lang: &Language) -> Result<()> {
        for t in SourceType::ALL {
            // files ignore the engine's declared default
            let default = if t == SourceType::File {
                SourceType::File.is_default_enabled()
            } else {
                lang.default_enabled()
            };

            let type_key = PolicyKey::type_key(t);
            let lang_type = PolicyKey::lang_type_key(lang, t);
            self.register(ScriptSetting::new(lang_type.clone(), vec![type_key.clone()], default))?;

            let contexts: Vec<_> = self.contexts.contexts().cloned().collect();
            for c in &contexts {
                let chain = vec![lang_type.clone(), PolicyKey::context_key(c), type_key.clone()];
                self.register(ScriptSetting::new(
                    PolicyKey::lang_type_context_key(lang, t, c),
                    chain,
                    default,
                ))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ScriptSettingsBuilder {
    languages: Option<LanguageCatalog>,
    contexts: Option<ContextRegistry>,
}

impl ScriptSettingsBuilder {
    pub fn languages(mut self, languages: LanguageCatalog) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn contexts(mut self, contexts: ContextRegistry) -> Self {
        self.contexts = Some(contexts);
        self
    }

    pub fn build(self) -> Result<ScriptSettings> {
        let contexts = self.contexts.ok_or(ScriptGateError::MissingContextRegistry)?;
        let languages = self.languages.unwrap_or_default();

        let mut out = ScriptSettings {
            settings: Vec::new(),
            index: HashMap::new(),
            languages: languages.clone(),
            contexts,
        };

        for t in SourceType::ALL {
            let default = t.is_default_enabled();
            out.register(ScriptSetting::new(PolicyKey::type_key(t), Vec::new(), default))?;
        }

        // contexts are default-deny regardless of source type
        let contexts: Vec<_> = out.contexts.contexts().cloned().collect();
        for c in &contexts {
            out.register(ScriptSetting::new(PolicyKey::context_key(c), Vec::new(), false))?;
        }

        for lang in languages.languages() {
            out.register_language(lang)?;
        }

        tracing::debug!(settings = out.settings.len(), "script settings generated");
        Ok(out)
    }
}
