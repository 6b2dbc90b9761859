//! Create operation
//!
//! Runs the release pipeline in a fixed order:
//! 1. Resolve the target bundle directory
//! 2. Materialize it from the template (overwrite decided by policy)
//! 3. Patch `metadata/annotations.yaml`
//! 4. Patch the cluster service version
//!
//! There is no rollback: a failure in step 4 leaves the annotations patched.

pub mod plan;

use std::path::PathBuf;

use crate::bundle::{OverwritePolicy, materialize};
use crate::error::Result;
use crate::layout;
use crate::manifest::{patch_annotations, patch_csv};
use crate::release::Release;
use crate::ui::Reporter;

pub use plan::Plan;

/// Where to create the bundle and how to treat an existing one
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Root of the managed-tenants checkout
    pub root: PathBuf,
    /// Template bundle directory to copy
    pub template: PathBuf,
    /// Decision for an already existing target bundle
    pub overwrite: OverwritePolicy,
    /// Only report what would be done
    pub dry_run: bool,
}

/// High-level create operation
pub struct CreateOperation<'a> {
    options: CreateOptions,
    reporter: &'a mut dyn Reporter,
}

impl<'a> CreateOperation<'a> {
    pub fn new(options: CreateOptions, reporter: &'a mut dyn Reporter) -> Self {
        Self { options, reporter }
    }

    /// Create the bundle for `release`, returning its directory
    pub fn execute(&mut self, release: &Release) -> Result<PathBuf> {
        let target = layout::bundle_path(&self.options.root, &release.version);

        if self.options.dry_run {
            let plan = Plan::new(&self.options, release, target.clone())?;
            plan.report(self.reporter);
            return Ok(target);
        }

        let policy = self.options.overwrite;
        let materialized = materialize(
            &self.options.template,
            &target,
            &release.version,
            |path| policy.decide(&release.version, path),
        )?;
        self.reporter.step(&format!(
            "Copied {} to {}",
            self.options.template.display(),
            target.display()
        ));
        if materialized.replaced {
            self.reporter.notice(&format!(
                "Replaced version {} with new bundle",
                release.version
            ));
        }
        for file in &materialized.copied {
            self.reporter.detail(&file.display().to_string());
        }

        self.reporter.step("Handling annotations");
        for (key, value) in patch_annotations(&target, &release.channel, &release.namespace)? {
            self.reporter.detail(&format!("{key}: {value}"));
        }

        self.reporter.step("Handling csv");
        let (csv_path, patched) = patch_csv(&target, release)?;
        self.reporter.detail(&csv_path.display().to_string());
        for (key, value) in patched {
            self.reporter.detail(&format!("{key}: {value}"));
        }

        self.reporter.success(&format!(
            "Created bundle {} at {}",
            release.version,
            target.display()
        ));
        Ok(target)
    }
}
