//! ClusterServiceVersion document (`manifests/*clusterserviceversion.yaml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::{PatchedField, load_document, save_document};
use crate::error::{Result, fs as fs_error, manifest as manifest_error};
use crate::layout::{CSV_SUFFIX, MANIFESTS_DIR};
use crate::release::Release;

/// The parts of a CSV a release bundle rewrites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterServiceVersion {
    pub metadata: CsvMetadata,
    pub spec: CsvSpec,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvMetadata {
    pub name: String,
    pub annotations: CsvAnnotations,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvAnnotations {
    #[serde(
        rename = "olm.skipRange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_range: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl ClusterServiceVersion {
    /// Stamp `release` onto the CSV.
    ///
    /// `spec.replaces` is only written when the release has a previous
    /// version; otherwise whatever the template carried stays.
    pub fn apply(&mut self, release: &Release) -> Vec<PatchedField> {
        let mut patched = Vec::with_capacity(5);

        let skip_range = release.skip_range();
        self.metadata.annotations.skip_range = Some(skip_range.clone());
        patched.push(("metadata.annotations.olm.skipRange", skip_range));

        self.metadata.name = release.csv_name();
        patched.push(("metadata.name", self.metadata.name.clone()));

        self.spec.version = Some(release.version.clone());
        patched.push(("spec.version", release.version.clone()));

        self.spec.maturity = Some(release.channel.clone());
        patched.push(("spec.maturity", release.channel.clone()));

        if let Some(replaces) = release.replaces() {
            self.spec.replaces = Some(replaces.clone());
            patched.push(("spec.replaces", replaces));
        }

        patched
    }
}

/// Locate the single CSV manifest of a bundle
pub fn find_csv(bundle_path: &Path) -> Result<PathBuf> {
    let manifests = bundle_path.join(MANIFESTS_DIR);
    let entries = fs::read_dir(&manifests)
        .map_err(|e| fs_error::read_failed(manifests.display().to_string(), e.to_string()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| fs_error::read_failed(manifests.display().to_string(), e.to_string()))?;
        let is_csv = entry.file_name().to_string_lossy().ends_with(CSV_SUFFIX);
        if is_csv && entry.path().is_file() {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(manifest_error::csv_not_found(
            manifests.display().to_string(),
        )),
        1 => Ok(candidates.remove(0)),
        _ => Err(manifest_error::ambiguous_csv(
            manifests.display().to_string(),
            candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        )),
    }
}

/// Rewrite the bundle's CSV for `release`, returning the file and the fields set
pub fn patch_csv(bundle_path: &Path, release: &Release) -> Result<(PathBuf, Vec<PatchedField>)> {
    let path = find_csv(bundle_path)?;
    let mut csv: ClusterServiceVersion = load_document(&path)?;
    let patched = csv.apply(release);
    save_document(&path, &csv)?;
    Ok((path, patched))
}
