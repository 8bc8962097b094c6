//! Catalogs the policy resolver is generated from.
//!
//! - `source_type`: the closed set of script source types.
//! - `context`: named execution contexts (built-in + plugin supplied).
//! - `language`: registered script languages and their declared defaults.
//!
//! Catalogs are built once at startup and handed to the resolver by value;
//! there is no global registry.

pub mod context;
pub mod language;
pub mod source_type;

pub use context::{ContextPlugin, ContextRegistry, ScriptContext};
pub use language::{Language, LanguageCatalog, NATIVE_LANG};
pub use source_type::SourceType;

use scriptgate_core::error::{Result, ScriptGateError};

/// Language and context ids become segments of dotted setting names, so they
/// are restricted to `[a-z0-9_-]`.
pub(crate) fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ScriptGateError::InvalidIdentifier(id.to_string(), "must not be empty"));
    }
    let ok = id
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');
    if !ok {
        return Err(ScriptGateError::InvalidIdentifier(
            id.to_string(),
            "only lowercase ascii letters, digits, '_' and '-' are allowed",
        ));
    }
    Ok(())
}
