//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::bundle::OverwritePolicy;
use crate::layout::DEFAULT_TEMPLATE;

/// Add a new bundle version to nvidia-gpu-addon in managed-tenants-bundles
#[derive(Parser, Debug)]
#[command(
    name = "addon-bundle",
    disable_version_flag = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add a new bundle version to nvidia-gpu-addon in managed-tenants-bundles",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  addon-bundle -m ../managed-tenants-bundles -v 1.3.0 -p 1.2.0\n   \
                  addon-bundle -m ../managed-tenants-bundles -v 2.0.0 -c stable --overwrite yes\n   \
                  addon-bundle -m ../managed-tenants-bundles -v 2.0.0 --dry-run\n"
)]
pub struct Cli {
    /// Path to the managed-tenants-bundles repository on disk
    #[arg(
        long = "manage-tenants-bundle-path",
        short = 'm',
        env = "MANAGED_TENANTS_BUNDLES_PATH"
    )]
    pub manage_tenants_bundle_path: PathBuf,

    /// Channel of the addon
    #[arg(long, short = 'c', default_value = "alpha")]
    pub channel: String,

    /// Suggested target namespace
    #[arg(long, short = 'n', default_value = "redhat-nvidia-gpu-addon")]
    pub namespace: String,

    /// New addon version
    #[arg(long, short = 'v')]
    pub version: String,

    /// Previous addon version, written as `spec.replaces` ("null" or empty to skip)
    #[arg(long = "prev-version", short = 'p', default_value = "")]
    pub prev_version: String,

    /// Template bundle directory to copy
    #[arg(
        long,
        short = 't',
        env = "ADDON_BUNDLE_TEMPLATE",
        default_value = DEFAULT_TEMPLATE
    )]
    pub template: PathBuf,

    /// What to do when the bundle version already exists
    #[arg(long, value_enum, default_value_t = OverwritePolicy::Prompt)]
    pub overwrite: OverwritePolicy,

    /// Replace an existing bundle without asking (same as --overwrite yes)
    #[arg(long, short = 'y', conflicts_with = "overwrite")]
    pub yes: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print every copied file and patched key
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Overwrite policy after folding in `--yes`
    pub fn overwrite_policy(&self) -> OverwritePolicy {
        if self.yes {
            OverwritePolicy::Yes
        } else {
            self.overwrite
        }
    }
}
