//! Shared error type across scriptgate crates.

use serde::Serialize;
use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Malformed bytes on the wire.
    Decode,
    /// Catalog or settings table could not be built.
    InvalidCatalog,
    /// Override refers to a setting nobody registered.
    UnknownSetting,
    /// Query names a language or context that is not registered.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Decode => "DECODE",
            ErrorCode::InvalidCatalog => "INVALID_CATALOG",
            ErrorCode::UnknownSetting => "UNKNOWN_SETTING",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScriptGateError>;

/// Unified error type used by core and node.
#[derive(Debug, Error)]
pub enum ScriptGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("context registry was never supplied")]
    MissingContextRegistry,
    #[error("invalid identifier [{0}]: {1}")]
    InvalidIdentifier(String, &'static str),
    #[error("script language [{0}] is registered more than once")]
    DuplicateLanguage(String),
    #[error("script context [{0}] is registered more than once")]
    DuplicateContext(String),
    #[error("native script [{0}] is registered more than once")]
    DuplicateNativeScript(String),
    #[error("more than one template backend registered: [{0}] and [{1}]")]
    MultipleTemplateBackends(String, String),
    #[error("setting [{0}] is registered more than once")]
    DuplicateSetting(String),
    #[error("unknown setting [{0}]")]
    UnknownSetting(String),
    #[error("invalid value for setting [{0}]: {1}")]
    InvalidSettingValue(String, String),
    #[error("unregistered script language [{0}]")]
    UnknownLanguage(String),
    #[error("unregistered script context [{0}]")]
    UnknownContext(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ScriptGateError {
    /// Map internal error to a stable caller-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScriptGateError::BadRequest(_) | ScriptGateError::Encode(_) => ErrorCode::BadRequest,
            ScriptGateError::Decode(_) => ErrorCode::Decode,
            ScriptGateError::MissingContextRegistry
            | ScriptGateError::InvalidIdentifier(..)
            | ScriptGateError::DuplicateLanguage(_)
            | ScriptGateError::DuplicateContext(_)
            | ScriptGateError::DuplicateNativeScript(_)
            | ScriptGateError::MultipleTemplateBackends(..)
            | ScriptGateError::DuplicateSetting(_) => ErrorCode::InvalidCatalog,
            ScriptGateError::UnknownSetting(_) => ErrorCode::UnknownSetting,
            ScriptGateError::InvalidSettingValue(..) => ErrorCode::BadRequest,
            ScriptGateError::UnknownLanguage(_) | ScriptGateError::UnknownContext(_) => {
                ErrorCode::NotFound
            }
            ScriptGateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ScriptGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
