//! Typed bundle metadata documents
//!
//! Each document is loaded whole, patched in memory and written back whole.
//! Keys the schema does not name are carried through flattened mappings so a
//! patch never drops template content.

pub mod annotations;
pub mod csv;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::fs::{atomic_write, read_to_string};
use crate::error::{Result, manifest as manifest_error};

pub use annotations::patch_annotations;
pub use csv::patch_csv;

/// A key set by a patch, with its new value
pub type PatchedField = (&'static str, String);

/// Parse a YAML document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| manifest_error::parse_failed(path.display().to_string(), e.to_string()))
}

/// Serialize a YAML document and replace the file at `path` with it
pub fn save_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(document)
        .map_err(|e| manifest_error::serialize_failed(path.display().to_string(), e.to_string()))?;
    atomic_write(path, &yaml)
}
