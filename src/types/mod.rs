//! Core type definitions for the installer

mod entry;
mod error;
mod options;

pub use entry::ManifestEntry;
pub use error::InstallerError;
pub use options::{OptionValue, ParsedArguments};
