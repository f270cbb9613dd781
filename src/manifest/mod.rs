//! Manifest loading
//!
//! The manifest (`config-file-list.txt`) names one config file per line,
//! relative to the source root. A [`ConfigSource`] knows how to fetch the
//! manifest and each named file, either from a local directory
//! ([`LocalSource`]) or from a web server ([`RemoteSource`]).

pub mod local;
pub mod remote;

use crate::types::{InstallerError, ManifestEntry};
use std::path::{Component, Path};

pub use local::LocalSource;
pub use remote::RemoteSource;

/// Manifest file name, relative to the source root
pub const MANIFEST_FILE: &str = "config-file-list.txt";

/// Default remote source root
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/smstw/sms-phpstorm-config-installer/master/res/";

/// Callback invoked after each file is fetched
///
/// Arguments:
/// - `index`: 1-based position in the manifest
/// - `total`: number of manifest entries
/// - `relative_path`: the fetched entry
pub type FetchCallback<'a> = dyn Fn(usize, usize, &str) + 'a;

/// Where config files come from
pub trait ConfigSource {
    /// Fetch the content at `relative_path` under the source root
    fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, InstallerError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Relative paths to install
    fn manifest(&self) -> Result<Vec<String>, InstallerError> {
        let bytes = self.fetch(MANIFEST_FILE)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            InstallerError::Validation(format!("{MANIFEST_FILE} is not valid UTF-8: {e}"))
        })?;
        parse_manifest(&text)
    }
}

/// Split manifest text into relative paths
///
/// A leading byte order mark is ignored. Lines are trimmed and empty lines
/// dropped. Absolute paths and paths with `..` components are rejected.
pub fn parse_manifest(text: &str) -> Result<Vec<String>, InstallerError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| validate_relative_path(line).map(|_| line.to_string()))
        .collect()
}

fn validate_relative_path(path: &str) -> Result<(), InstallerError> {
    let escapes = path.starts_with(['/', '\\'])
        || path.split(['/', '\\']).any(|part| part == "..")
        || Path::new(path)
            .components()
            .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir));

    if escapes {
        return Err(InstallerError::Validation(format!(
            "Manifest entry escapes the target directory: {path}"
        )));
    }
    Ok(())
}

/// Load the manifest and the content of every entry, in manifest order
///
/// The first failed fetch aborts loading.
pub fn load_manifest(
    source: &dyn ConfigSource,
    on_fetch: Option<&FetchCallback<'_>>,
) -> Result<Vec<ManifestEntry>, InstallerError> {
    tracing::info!(source = %source.describe(), "loading manifest");

    let paths = source.manifest()?;
    let total = paths.len();
    let mut entries = Vec::with_capacity(total);

    for (idx, relative_path) in paths.into_iter().enumerate() {
        let content = source.fetch(&relative_path)?;
        tracing::debug!(path = %relative_path, bytes = content.len(), "fetched");

        if let Some(callback) = on_fetch {
            callback(idx + 1, total, &relative_path);
        }
        entries.push(ManifestEntry::new(relative_path, content));
    }

    Ok(entries)
}
