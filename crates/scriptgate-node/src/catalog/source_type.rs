use std::fmt;
use std::str::FromStr;

use scriptgate_core::error::{Result, ScriptGateError};

/// Where a script's text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceType {
    /// Script file on the node's disk.
    File,
    /// Script stored in cluster state under an id.
    Stored,
    /// Script source sent inline with the request.
    Inline,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::File, SourceType::Stored, SourceType::Inline];

    /// Stable numeric id.
    pub fn id(self) -> u8 {
        match self {
            SourceType::File => 0,
            SourceType::Stored => 1,
            SourceType::Inline => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceType::File => "file",
            SourceType::Stored => "stored",
            SourceType::Inline => "inline",
        }
    }

    /// Built-in default. Files are never default-deny.
    pub fn is_default_enabled(self) -> bool {
        matches!(self, SourceType::File)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceType {
    type Err = ScriptGateError;

    fn from_str(s: &str) -> Result<Self> {
        SourceType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScriptGateError::BadRequest(format!("unknown script source type: {s}")))
    }
}
