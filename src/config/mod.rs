//! Configuration management
//!
//! Settings come from three layers, highest priority first: command-line
//! options, an optional TOML file (`--config <file>`), built-in defaults.

use crate::manifest::DEFAULT_BASE_URL;
use crate::platform::{DEFAULT_FOLDER_PREFIX, DEFAULT_IDE_VERSION};
use crate::types::{InstallerError, OptionValue, ParsedArguments};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where config files are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Download relative to a base URL
    Remote { base_url: String },

    /// Read from a local directory; `None` means the bundled `res` directory
    Local { root: Option<PathBuf> },
}

/// Global configuration for one install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// IDE version, digits only (e.g. "8", "10")
    pub ide_version: String,

    /// Folder name prefix ("WebIde")
    pub folder_prefix: String,

    /// Config file source
    pub source: SourceKind,

    /// Print error causes and debug logs
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ide_version: DEFAULT_IDE_VERSION.to_string(),
            folder_prefix: DEFAULT_FOLDER_PREFIX.to_string(),
            source: SourceKind::Remote {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            verbose: false,
        }
    }
}

/// Contents of a `--config` TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub ide_version: Option<VersionSetting>,
    pub folder_prefix: Option<String>,
    pub base_url: Option<String>,
    pub source: Option<PathBuf>,
}

/// `ide_version` may be written as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VersionSetting {
    Number(u32),
    Text(String),
}

impl VersionSetting {
    fn into_string(self) -> String {
        match self {
            VersionSetting::Number(n) => n.to_string(),
            VersionSetting::Text(s) => s,
        }
    }
}

impl ConfigFile {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self, InstallerError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            InstallerError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
            .map_err(|e| InstallerError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self, InstallerError> {
        toml::from_str(text).map_err(|e| InstallerError::Config(e.to_string()))
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), InstallerError> {
        if self.ide_version.is_empty() || !self.ide_version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstallerError::Config(format!(
                "IDE version must be a number, got {:?}",
                self.ide_version
            )));
        }

        if self.folder_prefix.trim().is_empty() {
            return Err(InstallerError::Config(
                "Folder prefix cannot be empty".to_string(),
            ));
        }

        if let SourceKind::Remote { base_url } = &self.source {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(InstallerError::Config(format!(
                    "Base URL must be http:// or https://, got {base_url:?}"
                )));
            }
        }

        Ok(())
    }

    /// Apply config file settings on top of the defaults
    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(version) = file.ide_version {
            self.ide_version = version.into_string();
        }
        if let Some(prefix) = file.folder_prefix {
            self.folder_prefix = prefix;
        }
        if let Some(root) = file.source {
            self.source = SourceKind::Local { root: Some(root) };
        } else if let Some(base_url) = file.base_url {
            self.source = SourceKind::Remote { base_url };
        }
    }
}

impl TryFrom<&ParsedArguments> for Config {
    type Error = InstallerError;

    fn try_from(args: &ParsedArguments) -> Result<Self, Self::Error> {
        let mut config = Config::default();

        match args.option_either("config", "c") {
            Some(OptionValue::Value(path)) if !path.is_empty() => {
                config.apply_file(ConfigFile::load(Path::new(path))?);
            }
            Some(_) => {
                return Err(InstallerError::Config(
                    "--config requires a file path".to_string(),
                ))
            }
            None => {}
        }

        // A flag or empty value means "use the default"
        if let Some(version) = args
            .option_either("ide-version", "i")
            .and_then(OptionValue::as_str)
            .filter(|v| !v.is_empty())
        {
            config.ide_version = version.to_string();
        }

        match args.option("source") {
            Some(OptionValue::Value(dir)) if !dir.is_empty() => {
                config.source = SourceKind::Local {
                    root: Some(PathBuf::from(dir)),
                };
            }
            Some(_) => config.source = SourceKind::Local { root: None },
            None => match args.option("base-url") {
                Some(OptionValue::Value(url)) if !url.is_empty() => {
                    config.source = SourceKind::Remote {
                        base_url: url.clone(),
                    };
                }
                Some(_) => {
                    return Err(InstallerError::Config(
                        "--base-url requires a URL".to_string(),
                    ))
                }
                None => {}
            },
        }

        config.verbose = args.flag("v") || args.flag("verbose");

        config.validate()?;
        Ok(config)
    }
}
