//! Installer: writes manifest entries into the target directory

pub mod write;

use crate::types::{InstallerError, ManifestEntry};
use std::path::{Path, PathBuf};

pub use write::write_file_atomic;

/// Summary of an install run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// One `"{relative} => {destination}"` line per written file, in order
    pub lines: Vec<String>,
    /// Number of files written
    pub files_written: usize,
    /// Aggregate bytes written
    pub bytes_written: u64,
}

/// Events emitted while installing
#[derive(Debug)]
pub enum InstallEvent<'a> {
    /// A file was written to its destination
    Written {
        relative_path: &'a str,
        destination: &'a Path,
        bytes: u64,
        line: &'a str,
    },
    /// All entries were written
    Complete { report: &'a InstallReport },
}

/// Optional callback used to receive install events.
pub type InstallCallback<'a> = dyn Fn(&InstallEvent<'_>) + 'a;

/// Destination path of a manifest entry: `{target_dir}/{relative_path}`
///
/// The separator is always `/`, also on Windows, so report lines read the
/// same on every host.
pub fn destination_for(target_dir: &Path, relative_path: &str) -> PathBuf {
    let mut destination = target_dir.as_os_str().to_os_string();
    if !target_dir.to_string_lossy().ends_with(['/', '\\']) {
        destination.push("/");
    }
    destination.push(relative_path);
    PathBuf::from(destination)
}

/// Report line for one written file
pub fn report_line(relative_path: &str, destination: &Path) -> String {
    format!("{} => {}", relative_path, destination.display())
}

/// Write every entry under `target_dir`, in order
///
/// `target_dir` must already exist. The first failure stops the run; files
/// written before it stay in place, so re-running completes the install.
pub fn install(
    target_dir: &Path,
    entries: &[ManifestEntry],
    on_event: Option<&InstallCallback<'_>>,
) -> Result<InstallReport, InstallerError> {
    if !target_dir.is_dir() {
        return Err(InstallerError::Environment(format!(
            "\"{}\" Target directory does not exist.",
            target_dir.display()
        )));
    }

    let mut report = InstallReport::default();

    for entry in entries {
        let destination = destination_for(target_dir, &entry.relative_path);
        let bytes = write_file_atomic(&destination, &entry.content)?;
        let line = report_line(&entry.relative_path, &destination);

        tracing::debug!(dest = %destination.display(), bytes, "installed");

        if let Some(callback) = on_event {
            callback(&InstallEvent::Written {
                relative_path: &entry.relative_path,
                destination: &destination,
                bytes,
                line: &line,
            });
        }

        report.files_written += 1;
        report.bytes_written += bytes;
        report.lines.push(line);
    }

    if let Some(callback) = on_event {
        callback(&InstallEvent::Complete { report: &report });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_target_dir_is_environment_error() {
        let temp = TempDir::new().expect("create tempdir");
        let target = temp.path().join(".WebIde08");

        let err = install(&target, &[ManifestEntry::new("a.xml", "a")], None).unwrap_err();

        assert!(matches!(err, InstallerError::Environment(_)));
        assert!(err.to_string().contains("Target directory does not exist"));
        assert!(!target.exists());
    }

    #[test]
    fn test_events_follow_manifest_order() {
        let temp = TempDir::new().expect("create tempdir");
        let entries = vec![
            ManifestEntry::new("config/b.xml", "bb"),
            ManifestEntry::new("config/a.xml", "a"),
        ];

        let seen = RefCell::new(Vec::new());
        let callback = |event: &InstallEvent<'_>| match event {
            InstallEvent::Written { relative_path, .. } => {
                seen.borrow_mut().push(relative_path.to_string())
            }
            InstallEvent::Complete { report } => {
                seen.borrow_mut().push(format!("done:{}", report.files_written))
            }
        };

        let report = install(temp.path(), &entries, Some(&callback)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["config/b.xml", "config/a.xml", "done:2"]
        );
        assert_eq!(report.bytes_written, 3);
        assert_eq!(
            report.lines[0],
            format!("config/b.xml => {}", temp.path().display().to_string() + "/config/b.xml")
        );
    }

    #[test]
    fn test_destination_joins_with_forward_slash() {
        assert_eq!(
            destination_for(Path::new("C:\\Users\\dev\\.WebIde08"), "config/a.xml")
                .display()
                .to_string(),
            "C:\\Users\\dev\\.WebIde08/config/a.xml"
        );
        assert_eq!(
            destination_for(Path::new("/home/dev/.WebIde08/"), "config/a.xml"),
            PathBuf::from("/home/dev/.WebIde08/config/a.xml")
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp = TempDir::new().expect("create tempdir");
        fs::write(temp.path().join("editor.xml"), "old contents that are longer").unwrap();

        install(temp.path(), &[ManifestEntry::new("editor.xml", "new")], None).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("editor.xml")).unwrap(), "new");
    }

    #[test]
    fn test_empty_manifest_writes_nothing() {
        let temp = TempDir::new().expect("create tempdir");
        let report = install(temp.path(), &[], None).unwrap();
        assert_eq!(report, InstallReport::default());
    }
}
