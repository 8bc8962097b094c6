//! scriptgate node library entry.
//!
//! This crate turns the scripting plugins a node was started with into an
//! immutable script-mode table: catalogs, plugin interface, setting keys,
//! resolution against operator overrides, and the read-only HTTP surface. It
//! is consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod catalog;
pub mod config;
pub mod ops;
pub mod plugin;
pub mod policy;
pub mod router;
pub mod settings;
