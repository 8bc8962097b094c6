use std::collections::BTreeMap;

use scriptgate_core::error::{Result, ScriptGateError};

use super::validate_identifier;

/// Reserved language of the built-in native engine. Always allowed, never
/// configurable, so it gets no settings.
pub const NATIVE_LANG: &str = "native";

/// A registered script language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
    default_enabled: bool,
    template: bool,
}

impl Language {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default for non-file source types.
    pub fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    pub fn is_template_backend(&self) -> bool {
        self.template
    }
}

/// Languages that receive script-mode settings, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, Language>,
}

impl LanguageCatalog {
    pub fn builder() -> LanguageCatalogBuilder {
        LanguageCatalogBuilder::default()
    }

    /// Iteration is by name, independent of registration order.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.get(name)
    }

    pub fn template_backend(&self) -> Option<&Language> {
        self.languages.values().find(|l| l.template)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct LanguageCatalogBuilder {
    languages: BTreeMap<String, Language>,
    template: Option<String>,
}

impl LanguageCatalogBuilder {
    /// Register a script engine's language with its declared default for
    /// non-file scripts. The native engine is skipped.
    pub fn engine(mut self, name: &str, default_enabled: bool) -> Result<Self> {
        if name == NATIVE_LANG {
            tracing::debug!(lang = name, "native engine excluded from script settings");
            return Ok(self);
        }
        self.insert(name, default_enabled, false)?;
        Ok(self)
    }

    /// Register the template backend. It is enabled by default whatever the
    /// backend itself declares. At most one backend may be registered.
    pub fn template_backend(mut self, name: &str, declared_default: bool) -> Result<Self> {
        if let Some(existing) = &self.template {
            return Err(ScriptGateError::MultipleTemplateBackends(
                existing.clone(),
                name.to_string(),
            ));
        }
        if !declared_default {
            tracing::debug!(lang = name, "template backend declared default-deny; forcing enabled");
        }
        self.insert(name, true, true)?;
        self.template = Some(name.to_string());
        Ok(self)
    }

    fn insert(&mut self, name: &str, default_enabled: bool, template: bool) -> Result<()> {
        validate_identifier(name)?;
        if name == NATIVE_LANG || self.languages.contains_key(name) {
            return Err(ScriptGateError::DuplicateLanguage(name.to_string()));
        }
        self.languages.insert(
            name.to_string(),
            Language {
                name: name.to_string(),
                default_enabled,
                template,
            },
        );
        Ok(())
    }

    pub fn build(self) -> LanguageCatalog {
        LanguageCatalog {
            languages: self.languages,
        }
    }
}
