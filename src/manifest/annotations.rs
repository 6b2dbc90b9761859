//! Package annotations document (`metadata/annotations.yaml`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::{PatchedField, load_document, save_document};
use crate::error::Result;
use crate::layout::{ADDON_NAME, ANNOTATIONS_PATH};

pub const CHANNELS_KEY: &str = "operators.operatorframework.io.bundle.channels.v1";
pub const DEFAULT_CHANNEL_KEY: &str = "operators.operatorframework.io.bundle.channel.default.v1";
pub const PACKAGE_KEY: &str = "operators.operatorframework.io.bundle.package.v1";
pub const SUGGESTED_NAMESPACE_KEY: &str = "operatorframework.io/suggested-namespace";

/// Top level of `annotations.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationsDocument {
    pub annotations: BundleAnnotations,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// The `annotations` mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleAnnotations {
    #[serde(
        rename = "operators.operatorframework.io.bundle.channels.v1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub channels: Option<String>,

    #[serde(
        rename = "operators.operatorframework.io.bundle.channel.default.v1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_channel: Option<String>,

    #[serde(
        rename = "operators.operatorframework.io.bundle.package.v1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub package: Option<String>,

    #[serde(
        rename = "operatorframework.io/suggested-namespace",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_namespace: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl AnnotationsDocument {
    /// Set channel, default channel, package and namespace unconditionally
    pub fn apply(&mut self, channel: &str, namespace: &str) -> Vec<PatchedField> {
        let annotations = &mut self.annotations;
        annotations.channels = Some(channel.to_string());
        annotations.default_channel = Some(channel.to_string());
        annotations.package = Some(ADDON_NAME.to_string());
        annotations.suggested_namespace = Some(namespace.to_string());

        vec![
            (CHANNELS_KEY, channel.to_string()),
            (DEFAULT_CHANNEL_KEY, channel.to_string()),
            (PACKAGE_KEY, ADDON_NAME.to_string()),
            (SUGGESTED_NAMESPACE_KEY, namespace.to_string()),
        ]
    }
}

/// Path of the annotations document inside a bundle
pub fn annotations_path(bundle_path: &Path) -> PathBuf {
    bundle_path.join(ANNOTATIONS_PATH)
}

/// Rewrite the bundle's annotations for `channel` and `namespace`
pub fn patch_annotations(
    bundle_path: &Path,
    channel: &str,
    namespace: &str,
) -> Result<Vec<PatchedField>> {
    let path = annotations_path(bundle_path);
    let mut document: AnnotationsDocument = load_document(&path)?;
    let patched = document.apply(channel, namespace);
    save_document(&path, &document)?;
    Ok(patched)
}
