//! Install command

use crate::config::{Config, SourceKind};
use crate::installer::{install, InstallEvent, InstallReport};
use crate::manifest::{load_manifest, ConfigSource, LocalSource, RemoteSource};
use crate::platform::{Environment, PlatformTarget};
use crate::types::InstallerError;
use crate::ui::FetchProgress;

/// Run the install operation
///
/// Resolves the target directory, loads every config file, then writes
/// them in manifest order, printing one `"{relative} => {destination}"`
/// line per file.
pub fn run(config: &Config, env: &dyn Environment) -> Result<InstallReport, InstallerError> {
    let target = PlatformTarget::detect(env, &config.folder_prefix, &config.ide_version)?;
    let target_dir = &target.install_directory;

    // Fail before downloading anything
    if !target_dir.is_dir() {
        return Err(InstallerError::Environment(format!(
            "\"{}\" Target directory does not exist.",
            target_dir.display()
        )));
    }

    let source = open_source(config)?;
    println!("Downloading config files...");

    let progress = FetchProgress::new();
    progress.start(&source.describe());
    let on_fetch = |index: usize, total: usize, path: &str| progress.fetched(index, total, path);

    let entries = match load_manifest(&*source, Some(&on_fetch)) {
        Ok(entries) => {
            progress.finish(entries.len());
            entries
        }
        Err(err) => {
            progress.abandon();
            return Err(err);
        }
    };

    let on_event = |event: &InstallEvent<'_>| {
        if let InstallEvent::Written { line, .. } = event {
            println!("{line}");
        }
    };

    let report = install(target_dir, &entries, Some(&on_event))?;
    tracing::info!(
        files = report.files_written,
        bytes = report.bytes_written,
        "install complete"
    );
    Ok(report)
}

fn open_source(config: &Config) -> Result<Box<dyn ConfigSource>, InstallerError> {
    Ok(match &config.source {
        SourceKind::Remote { base_url } => Box::new(RemoteSource::new(base_url.as_str())?),
        SourceKind::Local { root: Some(root) } => Box::new(LocalSource::new(root.clone())?),
        SourceKind::Local { root: None } => Box::new(LocalSource::bundled()?),
    })
}
