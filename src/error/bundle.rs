//! Bundle directory errors

use super::BundlerError;

/// Creates a bundle already exists error
pub fn already_exists(version: impl Into<String>, path: impl Into<String>) -> BundlerError {
    BundlerError::BundleAlreadyExists {
        version: version.into(),
        path: path.into(),
    }
}

/// Creates a template not found error
pub fn template_not_found(path: impl Into<String>) -> BundlerError {
    BundlerError::TemplateNotFound { path: path.into() }
}

/// Creates a missing test fixtures error
pub fn tests_missing(path: impl Into<String>) -> BundlerError {
    BundlerError::TestFixturesMissing { path: path.into() }
}
