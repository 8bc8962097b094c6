//! Wire protocol modules.
//!
//! - `stream`: length-prefixed binary primitives (vint, vlong, string).
//! - `ack`: the acknowledged-request header every mutating request carries.
//! - `delete`: delete-stored-template request (validation + encoding).
//!
//! All readers are panic-free: short or malformed input is reported as
//! `ScriptGateError::Decode` instead of indexing raw buffers.

pub mod ack;
pub mod delete;
pub mod stream;
