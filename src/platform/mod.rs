//! Platform detection and target directory resolution
//!
//! The target directory depends on the host OS family and the IDE version:
//!
//! | OS       | Target                                   |
//! |----------|------------------------------------------|
//! | Windows  | `{HOMEDRIVE}{HOMEPATH}\.WebIde08`        |
//! | Linux    | `{HOME}/.WebIde08`                       |
//! | others   | `{HOME}/Library/Preferences/WebIde08`    |
//!
//! Everything here is pure over an [`Environment`], so tests never touch
//! the real process environment.

use crate::types::InstallerError;
use std::path::PathBuf;

/// Folder name prefix shared by all WebIde versions
pub const DEFAULT_FOLDER_PREFIX: &str = "WebIde";

/// IDE version used when none is given
pub const DEFAULT_IDE_VERSION: &str = "8";

/// Source of environment variables and host identification
pub trait Environment {
    /// Value of an environment variable
    fn var(&self, key: &str) -> Option<String>;

    /// Host identification string (e.g. `Linux`, `Windows NT`, `Darwin`)
    fn host_name(&self) -> String;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn host_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl OsFamily {
    /// Classify a host identification string, case-insensitively by prefix
    pub fn from_host_name(host: &str) -> Self {
        let host = host.to_ascii_lowercase();
        if host.starts_with("windows") {
            OsFamily::Windows
        } else if host.starts_with("linux") {
            OsFamily::Linux
        } else if host.starts_with("darwin") || host.starts_with("macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Other
        }
    }
}

/// Resolved installation target for this host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTarget {
    pub os_family: OsFamily,
    pub install_directory: PathBuf,
}

impl PlatformTarget {
    /// Detect the OS family and compute the install directory
    pub fn detect(
        env: &dyn Environment,
        prefix: &str,
        version: &str,
    ) -> Result<Self, InstallerError> {
        let os_family = OsFamily::from_host_name(&env.host_name());
        let folder = folder_name(prefix, version);
        let install_directory = target_directory(env, os_family, &folder)?;

        tracing::debug!(?os_family, dir = %install_directory.display(), "resolved target directory");

        Ok(Self {
            os_family,
            install_directory,
        })
    }
}

/// Build the versioned folder name, left-padding the version to two digits
///
/// An empty version falls back to [`DEFAULT_IDE_VERSION`].
pub fn folder_name(prefix: &str, version: &str) -> String {
    let version = if version.is_empty() {
        DEFAULT_IDE_VERSION
    } else {
        version
    };
    format!("{prefix}{version:0>2}")
}

/// Compute the install directory for an OS family
pub fn target_directory(
    env: &dyn Environment,
    os_family: OsFamily,
    folder: &str,
) -> Result<PathBuf, InstallerError> {
    match os_family {
        OsFamily::Windows => {
            let drive = require_var(env, "HOMEDRIVE")?;
            let path = require_var(env, "HOMEPATH")?;
            Ok(PathBuf::from(format!("{drive}{path}\\.{folder}")))
        }
        OsFamily::Linux => Ok(PathBuf::from(require_var(env, "HOME")?).join(format!(".{folder}"))),
        OsFamily::MacOs | OsFamily::Other => Ok(PathBuf::from(require_var(env, "HOME")?)
            .join("Library")
            .join("Preferences")
            .join(folder)),
    }
}

/// Resolve the target directory from the IDE version with the default prefix
pub fn resolve_target_directory(
    env: &dyn Environment,
    version: &str,
) -> Result<PathBuf, InstallerError> {
    PlatformTarget::detect(env, DEFAULT_FOLDER_PREFIX, version).map(|t| t.install_directory)
}

fn require_var(env: &dyn Environment, key: &str) -> Result<String, InstallerError> {
    match env.var(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(InstallerError::Environment(format!(
            "{key} is not set; cannot locate the user profile directory"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv {
        host: &'static str,
        vars: HashMap<&'static str, &'static str>,
    }

    impl Environment for FakeEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).map(|v| v.to_string())
        }

        fn host_name(&self) -> String {
            self.host.to_string()
        }
    }

    #[test]
    fn test_folder_name_padding() {
        assert_eq!(folder_name("WebIde", "8"), "WebIde08");
        assert_eq!(folder_name("WebIde", "10"), "WebIde10");
        assert_eq!(folder_name("WebIde", "123"), "WebIde123");
        assert_eq!(folder_name("WebIde", ""), "WebIde08");
    }

    #[test]
    fn test_os_family_detection() {
        assert_eq!(OsFamily::from_host_name("Windows NT"), OsFamily::Windows);
        assert_eq!(OsFamily::from_host_name("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_host_name("LINUX"), OsFamily::Linux);
        assert_eq!(OsFamily::from_host_name("Darwin"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_host_name("freebsd"), OsFamily::Other);
        assert_eq!(OsFamily::from_host_name("my-linux"), OsFamily::Other);
    }

    #[test]
    fn test_windows_path_concatenates_drive_and_path() {
        let env = FakeEnv {
            host: "windows",
            vars: HashMap::from([("HOMEDRIVE", "C:"), ("HOMEPATH", "\\Users\\dev")]),
        };
        let dir = resolve_target_directory(&env, "9").unwrap();
        assert_eq!(dir, PathBuf::from("C:\\Users\\dev\\.WebIde09"));
    }

    #[test]
    fn test_missing_home_is_environment_error() {
        let env = FakeEnv {
            host: "linux",
            vars: HashMap::new(),
        };
        let err = resolve_target_directory(&env, "8").unwrap_err();
        assert!(matches!(err, InstallerError::Environment(_)));
    }
}
