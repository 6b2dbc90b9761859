//! Dry-run plan: what a create run would write, without touching disk

use std::path::PathBuf;

use super::CreateOptions;
use crate::bundle::OverwritePolicy;
use crate::error::{Result, bundle as bundle_error};
use crate::release::Release;
use crate::ui::Reporter;

/// Values a create run would produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub target: PathBuf,
    pub target_exists: bool,
    pub overwrite: OverwritePolicy,
    pub csv_name: String,
    pub skip_range: String,
    pub replaces: Option<String>,
    pub channel: String,
    pub namespace: String,
}

impl Plan {
    /// Build the plan, failing if the template directory is missing
    pub fn new(options: &CreateOptions, release: &Release, target: PathBuf) -> Result<Self> {
        if !options.template.is_dir() {
            return Err(bundle_error::template_not_found(
                options.template.display().to_string(),
            ));
        }

        Ok(Self {
            target_exists: target.is_dir(),
            target,
            overwrite: options.overwrite,
            csv_name: release.csv_name(),
            skip_range: release.skip_range(),
            replaces: release.replaces(),
            channel: release.channel.clone(),
            namespace: release.namespace.clone(),
        })
    }

    pub fn report(&self, reporter: &mut dyn Reporter) {
        reporter.step(&format!("Would create bundle at {}", self.target.display()));
        if self.target_exists {
            let action = match self.overwrite {
                OverwritePolicy::Yes => "would be replaced",
                OverwritePolicy::No => "would be kept and the run would fail",
                OverwritePolicy::Prompt => "would prompt before replacing",
            };
            reporter.notice(&format!("Existing bundle {action}"));
        }
        reporter.info(&format!("  name:      {}", self.csv_name));
        reporter.info(&format!("  skipRange: {}", self.skip_range));
        reporter.info(&format!(
            "  replaces:  {}",
            self.replaces.as_deref().unwrap_or("(unchanged)")
        ));
        reporter.info(&format!("  channel:   {}", self.channel));
        reporter.info(&format!("  namespace: {}", self.namespace));
    }
}
