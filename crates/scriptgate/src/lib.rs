//! Top-level facade crate for scriptgate.
//!
//! Re-exports core types and the node library so users can depend on a single
//! crate. `prelude` carries what an embedder needs to build and query a
//! script-mode table.

pub mod core {
    pub use scriptgate_core::*;
}

pub mod node {
    pub use scriptgate_node::*;
}

pub mod prelude {
    pub use scriptgate_core::error::{ErrorCode, Result, ScriptGateError};
    pub use scriptgate_core::protocol::delete::{DeleteStoredTemplateRequest, ValidationErrors};
    pub use scriptgate_core::protocol::stream::{Readable, Writeable};
    pub use scriptgate_node::catalog::{ContextRegistry, LanguageCatalog, SourceType};
    pub use scriptgate_node::plugin::{PluginSet, ScriptPlugin};
    pub use scriptgate_node::policy::{ScriptModes, ScriptSettings};
    pub use scriptgate_node::settings::{OverrideStore, Settings};
}
