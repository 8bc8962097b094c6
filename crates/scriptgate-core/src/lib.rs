//! scriptgate core: error types and wire primitives shared by the node and
//! any client tooling.
//!
//! This crate carries no runtime or transport dependencies. It defines the
//! error surface used by every other crate and the binary stream codec for
//! stored-template requests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Malformed bytes surface as `ScriptGateError::Decode` instead of crashing
//! the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, ScriptGateError};
