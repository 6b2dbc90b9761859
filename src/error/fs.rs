//! File system errors

use super::BundlerError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a copy failed error
pub fn copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> BundlerError {
    BundlerError::CopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}
