//! Manifest document errors

use super::BundlerError;
use crate::layout::CSV_SUFFIX;

/// Creates a CSV not found error
pub fn csv_not_found(dir: impl Into<String>) -> BundlerError {
    BundlerError::CsvNotFound {
        dir: dir.into(),
        suffix: CSV_SUFFIX.to_string(),
    }
}

/// Creates an ambiguous CSV error
pub fn ambiguous_csv(dir: impl Into<String>, candidates: Vec<String>) -> BundlerError {
    BundlerError::AmbiguousCsv {
        dir: dir.into(),
        candidates,
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest serialize failed error
pub fn serialize_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::ManifestSerializeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
