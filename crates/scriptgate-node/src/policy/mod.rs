//! Script-mode policy (keys, setting generation, resolved table).
//!
//! Compiles catalogs and operator overrides into an immutable lookup table
//! the script service consults before running anything.

pub mod keys;
pub mod modes;
pub mod resolver;

pub use keys::PolicyKey;
pub use modes::{ResolvedSetting, ScriptModes};
pub use resolver::{ScriptSetting, ScriptSettings};
