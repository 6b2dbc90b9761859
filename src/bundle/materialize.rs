//! Copy a template bundle into its versioned location

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::copy_dir_recursive;
use crate::error::{Result, bundle as bundle_error, fs as fs_error};
use crate::layout::TESTS_DIR;

/// Outcome of a successful materialization
#[derive(Debug)]
pub struct Materialized {
    /// True when an existing bundle was deleted first
    pub replaced: bool,
    /// Files copied from the template, relative to it, `tests/` included
    pub copied: Vec<PathBuf>,
}

/// Create `target` as a copy of `template` without its `tests/` directory.
///
/// When `target` already exists `confirm_overwrite` is asked once; `false`
/// fails with [`BundleAlreadyExists`](crate::error::BundlerError::BundleAlreadyExists)
/// and leaves the directory alone, `true` deletes it before copying.
pub fn materialize<F>(
    template: &Path,
    target: &Path,
    version: &str,
    confirm_overwrite: F,
) -> Result<Materialized>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if !template.is_dir() {
        return Err(bundle_error::template_not_found(
            template.display().to_string(),
        ));
    }

    let replaced = if target.is_dir() {
        if !confirm_overwrite(target)? {
            return Err(bundle_error::already_exists(
                version,
                target.display().to_string(),
            ));
        }
        fs::remove_dir_all(target).map_err(|e| {
            fs_error::write_failed(target.display().to_string(), e.to_string())
        })?;
        true
    } else {
        false
    };

    let copied = copy_dir_recursive(template, target)?;

    let tests = target.join(TESTS_DIR);
    if !tests.is_dir() {
        return Err(bundle_error::tests_missing(tests.display().to_string()));
    }
    fs::remove_dir_all(&tests)
        .map_err(|e| fs_error::write_failed(tests.display().to_string(), e.to_string()))?;

    Ok(Materialized { replaced, copied })
}
