//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Copy a directory recursively, creating `dst` and any missing parents.
///
/// Symlinks are followed, so linked files and directories land in `dst` as
/// regular copies. Returns the copied files relative to `src`, in walk order.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let from = e
                .path()
                .map_or_else(|| src.display().to_string(), |p| p.display().to_string());
            fs_error::copy_failed(from, dst.display().to_string(), e.to_string())
        })?;

        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        let outcome = if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
        } else {
            fs::copy(entry.path(), &target).map(|_| ())
        };
        outcome.map_err(|e| {
            fs_error::copy_failed(
                entry.path().display().to_string(),
                target.display().to_string(),
                e.to_string(),
            )
        })?;

        if !entry.file_type().is_dir() {
            copied.push(relative.to_path_buf());
        }
    }

    Ok(copied)
}

/// Write content to a file atomically.
///
/// The content goes to a temp file next to `path` which is then renamed over
/// it, so readers see either the old or the new document. An existing file
/// keeps its permissions.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| write_error(path, &e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_error(path, &e))?;
    temp_file.flush().map_err(|e| write_error(path, &e))?;
    if let Ok(existing) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| write_error(path, &e))?;
    }
    temp_file.persist(path).map_err(|e| write_error(path, &e))?;

    Ok(())
}

fn write_error(path: &Path, err: &impl std::fmt::Display) -> crate::error::BundlerError {
    fs_error::write_failed(path.display().to_string(), err.to_string())
}

/// Read a file to a string, naming the path in the error
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))
}
