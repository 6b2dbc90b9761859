//! Fixed locations inside a managed-tenants checkout and inside a bundle

use std::path::{Path, PathBuf};

/// Addon directory relative to the managed-tenants root
pub const ADDON_PATH: &str = "addons/nvidia-gpu-addon/main";

/// Operator package name, also the prefix of every CSV name
pub const ADDON_NAME: &str = "nvidia-gpu-addon-operator";

/// File name suffix identifying the cluster service version manifest
pub const CSV_SUFFIX: &str = "clusterserviceversion.yaml";

/// Bundle-relative path of the package annotations document
pub const ANNOTATIONS_PATH: &str = "metadata/annotations.yaml";

/// Bundle-relative directory holding the manifests
pub const MANIFESTS_DIR: &str = "manifests";

/// Bundle-relative directory of test fixtures stripped from every release
pub const TESTS_DIR: &str = "tests";

/// Default template bundle, relative to the invocation directory
pub const DEFAULT_TEMPLATE: &str = "./bundle";

/// Resolve the directory a bundle of `version` lives in.
///
/// The version is joined as-is; it is not checked for path separators.
pub fn bundle_path(root: &Path, version: &str) -> PathBuf {
    root.join(ADDON_PATH).join(version)
}

/// Qualified CSV name for a version, e.g. `nvidia-gpu-addon-operator.1.2.0`
pub fn csv_name(version: &str) -> String {
    format!("{ADDON_NAME}.{version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_path() {
        let path = bundle_path(Path::new("/repos/managed-tenants-bundles"), "1.2.0");
        assert_eq!(
            path,
            PathBuf::from("/repos/managed-tenants-bundles/addons/nvidia-gpu-addon/main/1.2.0")
        );
    }

    #[test]
    fn test_bundle_path_relative_root() {
        let path = bundle_path(Path::new("mtb"), "0.0.1-rc1");
        assert_eq!(path, Path::new("mtb").join(ADDON_PATH).join("0.0.1-rc1"));
    }

    #[test]
    fn test_csv_name() {
        assert_eq!(csv_name("2.0.0"), "nvidia-gpu-addon-operator.2.0.0");
    }
}
