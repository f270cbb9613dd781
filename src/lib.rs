//! # ide-config-installer - WebIde config file installer
//!
//! Copies a fixed set of IDE configuration files (code styles, editor
//! settings) from a remote or bundled source into the per-user, per-OS
//! WebIde (PhpStorm) configuration directory.

// Module declarations
pub mod args;
pub mod commands;
pub mod config;
pub mod installer;
pub mod manifest;
pub mod platform;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{InstallerError, ManifestEntry, OptionValue, ParsedArguments};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
