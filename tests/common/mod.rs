//! Common test utilities for addon-bundle integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CSV_FILE: &str = "nvidia-gpu-addon-operator.clusterserviceversion.yaml";

#[allow(dead_code)]
pub const TEMPLATE_CSV: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  annotations:
    alm-examples: '[]'
    capabilities: Basic Install
    olm.skipRange: ">=0.0.1 <0.0.1"
  name: nvidia-gpu-addon-operator.v0.0.1
spec:
  displayName: NVIDIA GPU Add-on
  maturity: alpha
  version: 0.0.1
"#;

pub const TEMPLATE_ANNOTATIONS: &str = r"annotations:
  operators.operatorframework.io.bundle.channel.default.v1: alpha
  operators.operatorframework.io.bundle.channels.v1: alpha
  operators.operatorframework.io.bundle.manifests.v1: manifests/
  operators.operatorframework.io.bundle.mediatype.v1: registry+v1
  operators.operatorframework.io.bundle.metadata.v1: metadata/
  operators.operatorframework.io.bundle.package.v1: nvidia-gpu-addon-operator
";

/// A working directory holding `./bundle` and a managed-tenants checkout
pub struct TestRepo {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Invocation directory, parent of `bundle/`
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a working directory with a complete template bundle
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let repo = Self { temp, path };

        repo.write_file(&format!("bundle/manifests/{CSV_FILE}"), TEMPLATE_CSV);
        repo.write_file(
            "bundle/manifests/nvidia.addons.rh-ecosystem-edge.io_gpuaddons.yaml",
            "kind: CustomResourceDefinition\n",
        );
        repo.write_file("bundle/metadata/annotations.yaml", TEMPLATE_ANNOTATIONS);
        repo.write_file("bundle/tests/scorecard/config.yaml", "kind: Configuration\n");
        std::fs::create_dir_all(repo.tenants_root()).expect("Failed to create tenants root");

        repo
    }

    /// Root of the managed-tenants-bundles checkout
    pub fn tenants_root(&self) -> PathBuf {
        self.path.join("managed-tenants-bundles")
    }

    /// Directory a bundle version is created in
    pub fn bundle_dir(&self, version: &str) -> PathBuf {
        self.tenants_root()
            .join("addons/nvidia-gpu-addon/main")
            .join(version)
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Command running in the working directory with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("addon-bundle").expect("Failed to find binary");
        cmd.current_dir(&self.path)
            .env_remove("MANAGED_TENANTS_BUNDLES_PATH")
            .env_remove("ADDON_BUNDLE_TEMPLATE");
        cmd
    }

    /// Command with the tenants root and version already set
    pub fn create_cmd(&self, version: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--manage-tenants-bundle-path")
            .arg(self.tenants_root())
            .args(["--version", version]);
        cmd
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a YAML file into a generic value
#[allow(dead_code)]
pub fn read_yaml(path: &Path) -> serde_yaml::Value {
    let content = std::fs::read_to_string(path).expect("Failed to read YAML file");
    serde_yaml::from_str(&content).expect("Failed to parse YAML file")
}

/// Look up a nested string value by key path
#[allow(dead_code)]
pub fn yaml_str<'a>(value: &'a serde_yaml::Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .try_fold(value, |current, key| current.get(*key))
        .and_then(serde_yaml::Value::as_str)
}
