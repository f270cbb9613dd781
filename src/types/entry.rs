//! ManifestEntry - one config file to install

/// A config file named by the manifest, with its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to both the source root and the target directory
    pub relative_path: String,

    /// File content
    pub content: Vec<u8>,
}

impl ManifestEntry {
    /// Create a new entry
    pub fn new(relative_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}
