//! mhforms-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise the
//! config layer and the background import directly.

pub mod commands;
pub mod config;
