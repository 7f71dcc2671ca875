//! Command-line front end for safeword
//!
//! Derives the same phrase the browser bindings produce, which makes it
//! useful for scripting and for cross-checking what a peer reads out.

/// Command handlers
pub mod commands;
/// Configuration file loading
pub mod config;

pub use config::{CliConfig, OutputFormat};
