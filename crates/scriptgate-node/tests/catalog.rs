//! Catalog construction from plugins: exclusions, duplicates, identifiers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use scriptgate_core::error::{ErrorCode, ScriptGateError};
use scriptgate_node::catalog::{ContextPlugin, ContextRegistry, LanguageCatalog, SourceType};
use scriptgate_node::plugin::{
    EngineDescriptor, NativeEnginePlugin, NativeScriptFactory, PluginSet, ScriptPlugin,
    TemplateBackend,
};

struct TestPlugin {
    name: &'static str,
    engine: Option<(&'static str, bool)>,
    template: Option<&'static str>,
    context: Option<&'static str>,
    natives: Vec<&'static str>,
}

impl TestPlugin {
    fn named(name: &'static str) -> Self {
        Self {
            name,
            engine: None,
            template: None,
            context: None,
            natives: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Native(&'static str);

impl NativeScriptFactory for Native {
    fn name(&self) -> &str {
        self.0
    }
}

impl ScriptPlugin for TestPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn script_engine(&self) -> Option<EngineDescriptor> {
        self.engine.map(|(lang, d)| EngineDescriptor {
            lang: lang.to_string(),
            default_inline_enabled: d,
        })
    }

    fn template_backend(&self) -> Option<TemplateBackend> {
        // backends in these tests declare default-deny for themselves
        self.template.map(|lang| TemplateBackend {
            lang: lang.to_string(),
            default_inline_enabled: false,
        })
    }

    fn native_scripts(&self) -> Vec<Arc<dyn NativeScriptFactory>> {
        self.natives
            .iter()
            .map(|&n| Arc::new(Native(n)) as Arc<dyn NativeScriptFactory>)
            .collect()
    }

    fn custom_script_contexts(&self) -> Option<ContextPlugin> {
        self.context.map(|op| ContextPlugin::new(self.name, op))
    }
}

fn set(plugins: Vec<TestPlugin>) -> PluginSet {
    let mut s = PluginSet::new();
    s.register(Arc::new(NativeEnginePlugin));
    for p in plugins {
        s.register(Arc::new(p));
    }
    s
}

#[test]
fn native_engine_gets_no_settings() {
    let langs = set(vec![]).language_catalog().unwrap();
    assert!(langs.is_empty());
    assert!(langs.get("native").is_none());
}

#[test]
fn engines_and_template_backend() {
    let mut painless = TestPlugin::named("lang-painless");
    painless.engine = Some(("painless", true));
    let mut mustache = TestPlugin::named("lang-mustache");
    mustache.template = Some("mustache");

    let langs = set(vec![mustache, painless]).language_catalog().unwrap();
    assert_eq!(langs.len(), 2);
    assert!(langs.get("painless").unwrap().default_enabled());
    let backend = langs.template_backend().unwrap();
    assert_eq!(backend.name(), "mustache");
    // declared false by the plugin, forced on by the catalog
    assert!(backend.default_enabled());
}

#[test]
fn two_template_backends_are_fatal() {
    let mut a = TestPlugin::named("a");
    a.template = Some("mustache");
    let mut b = TestPlugin::named("b");
    b.template = Some("handlebars");

    let err = set(vec![a, b]).language_catalog().unwrap_err();
    assert!(matches!(err, ScriptGateError::MultipleTemplateBackends(..)), "{err}");
    assert_eq!(err.code(), ErrorCode::InvalidCatalog);
}

#[test]
fn duplicate_engine_language_is_fatal() {
    let mut a = TestPlugin::named("a");
    a.engine = Some(("groovy", false));
    let mut b = TestPlugin::named("b");
    b.engine = Some(("groovy", true));

    let err = set(vec![a, b]).language_catalog().unwrap_err();
    assert!(matches!(err, ScriptGateError::DuplicateLanguage(ref l) if l == "groovy"), "{err}");
}

#[test]
fn template_backend_colliding_with_engine_is_fatal() {
    let mut a = TestPlugin::named("a");
    a.engine = Some(("mustache", false));
    let mut b = TestPlugin::named("b");
    b.template = Some("mustache");

    let err = set(vec![a, b]).language_catalog().unwrap_err();
    assert!(matches!(err, ScriptGateError::DuplicateLanguage(_)), "{err}");
}

#[test]
fn template_backend_cannot_claim_native() {
    let err = LanguageCatalog::builder().template_backend("native", true).unwrap_err();
    assert!(matches!(err, ScriptGateError::DuplicateLanguage(_)), "{err}");
}

#[test]
fn language_identifiers_are_restricted() {
    for bad in ["", "Groovy", "my.lang", "with space"] {
        let err = LanguageCatalog::builder().engine(bad, true).unwrap_err();
        assert!(matches!(err, ScriptGateError::InvalidIdentifier(..)), "lang={bad:?}: {err}");
    }
}

#[test]
fn plugin_contexts_are_prefixed() {
    let mut p = TestPlugin::named("ingest-geo");
    p.context = Some("enrich");
    let contexts = set(vec![p]).context_registry().unwrap();
    assert_eq!(contexts.len(), 5);
    assert!(contexts.get("ingest-geo_enrich").is_some());
    assert!(contexts.get("search").is_some());
}

#[test]
fn duplicate_context_is_fatal() {
    let err = ContextRegistry::new([ContextPlugin::new("p", "op"), ContextPlugin::new("p", "op")])
        .unwrap_err();
    assert!(matches!(err, ScriptGateError::DuplicateContext(ref c) if c == "p_op"), "{err}");
}

#[test]
fn malformed_plugin_context_is_fatal() {
    let err = ContextRegistry::new([ContextPlugin::new("", "op")]).unwrap_err();
    assert!(matches!(err, ScriptGateError::InvalidIdentifier(..)), "{err}");

    let err = ContextRegistry::new([ContextPlugin::new("My.Plugin", "op")]).unwrap_err();
    assert!(matches!(err, ScriptGateError::InvalidIdentifier(..)), "{err}");
}

#[test]
fn duplicate_native_script_is_fatal() {
    let mut a = TestPlugin::named("a");
    a.natives = vec!["distance"];
    let mut b = TestPlugin::named("b");
    b.natives = vec!["score", "distance"];

    let err = set(vec![a, b]).native_scripts().unwrap_err();
    assert!(matches!(err, ScriptGateError::DuplicateNativeScript(ref n) if n == "distance"));
}

#[test]
fn source_type_names_and_ids() {
    assert_eq!("INLINE".parse::<SourceType>().unwrap(), SourceType::Inline);
    assert_eq!("stored".parse::<SourceType>().unwrap(), SourceType::Stored);
    assert!("remote".parse::<SourceType>().is_err());

    let ids: Vec<u8> = SourceType::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, [0, 1, 2]);
    assert_eq!(SourceType::File.to_string(), "file");
}
