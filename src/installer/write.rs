//! Atomic config file write

use crate::types::InstallerError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to `dest` using the write-then-rename strategy
///
/// 1. Create missing parent directories (0755 on Unix)
/// 2. Write to a sibling `<name>.part` file
/// 3. Flush and sync to disk
/// 4. Close the handle and rename over the destination (closing first is required on Windows)
/// 5. On any failure, remove the `.part` file
///
/// # Returns
/// * `Ok(u64)` - Number of bytes written
/// * `Err(InstallerError::Write)` - the failing path and IO error
pub fn write_file_atomic(dest: &Path, content: &[u8]) -> Result<u64, InstallerError> {
    if let Some(parent) = dest.parent() {
        create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let part_path = part_path_for(dest);

    let result = write_part(&part_path, content)
        .and_then(|_| fs::rename(&part_path, dest).map_err(|e| write_error(dest, e)));

    if result.is_err() {
        // No half-written .part file may stay behind in the target directory
        let _ = fs::remove_file(&part_path);
    }

    result.map(|_| content.len() as u64)
}

fn write_part(part_path: &Path, content: &[u8]) -> Result<(), InstallerError> {
    let mut part_file = File::create(part_path).map_err(|e| write_error(part_path, e))?;
    part_file
        .write_all(content)
        .and_then(|_| part_file.sync_all())
        .map_err(|e| write_error(part_path, e))
}

/// `<dest>.part`, keeping the original extension so siblings never collide
fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

fn write_error(path: &Path, source: std::io::Error) -> InstallerError {
    InstallerError::Write {
        path: path.to_path_buf(),
        source,
    }
}
