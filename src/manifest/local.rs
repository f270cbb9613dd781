//! Config files bundled in a local directory

use super::{parse_manifest, ConfigSource, MANIFEST_FILE};
use crate::types::InstallerError;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory walked when the source root has no manifest file
pub const CONFIG_SUBDIR: &str = "config";

/// Reads config files from a directory on disk
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    /// Open a source root, which must be an existing directory
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, InstallerError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(InstallerError::Environment(format!(
                "\"{}\" Source directory does not exist.",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// The `res` directory next to the running executable
    pub fn bundled() -> Result<Self, InstallerError> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::new(dir.join("res"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file under `config/`, relative to the root, sorted
    fn discover(&self) -> Result<Vec<String>, InstallerError> {
        let config_dir = self.root.join(CONFIG_SUBDIR);
        if !config_dir.is_dir() {
            return Err(InstallerError::Environment(format!(
                "\"{}\" has neither {} nor a {}/ directory.",
                self.root.display(),
                MANIFEST_FILE,
                CONFIG_SUBDIR
            )));
        }

        let mut paths = Vec::new();
        for result in ignore::WalkBuilder::new(&config_dir)
            .standard_filters(true)
            .build()
        {
            let entry = result.map_err(|e| {
                InstallerError::Io(std::io::Error::other(format!(
                    "Failed to walk {}: {}",
                    config_dir.display(),
                    e
                )))
            })?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                tracing::warn!(path = %entry.path().display(), "skipping file outside source root");
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            paths.push(relative);
        }

        paths.sort();
        Ok(paths)
    }
}

impl ConfigSource for LocalSource {
    fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, InstallerError> {
        let path = self.root.join(relative_path);
        fs::read(&path).map_err(|e| {
            InstallerError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn manifest(&self) -> Result<Vec<String>, InstallerError> {
        let manifest_path = self.root.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            parse_manifest(&fs::read_to_string(&manifest_path)?)
        } else {
            self.discover()
        }
    }
}
