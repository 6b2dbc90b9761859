//! Error types and handling for addon-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle directory errors (existing target, template, fixtures)
//! - [`manifest`]: CSV and annotations document errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod fs;
pub mod manifest;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundle creation
#[derive(Error, Diagnostic, Debug)]
pub enum BundlerError {
    // Bundle errors
    #[error("bundle version ({version}) already exists. Path: {path}")]
    #[diagnostic(
        code(addon_bundle::bundle::already_exists),
        help("Re-run with --overwrite yes (or -y) to replace the existing bundle")
    )]
    BundleAlreadyExists { version: String, path: String },

    #[error("Template bundle not found: {path}")]
    #[diagnostic(
        code(addon_bundle::bundle::template_not_found),
        help("Pass --template <dir> or run from the directory that contains ./bundle")
    )]
    TemplateNotFound { path: String },

    #[error("Template bundle has no tests directory: {path}")]
    #[diagnostic(code(addon_bundle::bundle::tests_missing))]
    TestFixturesMissing { path: String },

    // Manifest errors
    #[error("No file ending in '{suffix}' found in {dir}")]
    #[diagnostic(code(addon_bundle::manifest::csv_not_found))]
    CsvNotFound { dir: String, suffix: String },

    #[error("Multiple cluster service versions found in {dir}: {}", .candidates.join(", "))]
    #[diagnostic(
        code(addon_bundle::manifest::ambiguous_csv),
        help("A bundle must contain exactly one cluster service version manifest")
    )]
    AmbiguousCsv { dir: String, candidates: Vec<String> },

    #[error("Failed to parse manifest {path}: {reason}")]
    #[diagnostic(code(addon_bundle::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to serialize manifest {path}: {reason}")]
    #[diagnostic(code(addon_bundle::manifest::serialize_failed))]
    ManifestSerializeFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(addon_bundle::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(addon_bundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(addon_bundle::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    // Prompt errors
    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(addon_bundle::prompt::failed))]
    PromptFailed { message: String },
}

impl From<inquire::InquireError> for BundlerError {
    fn from(err: inquire::InquireError) -> Self {
        BundlerError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlerError>;
