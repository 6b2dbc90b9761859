//! Create command CLI wrapper
//!
//! Turns parsed arguments into a [`Release`] and [`CreateOptions`] and
//! delegates to [`CreateOperation`].

use crate::cli::Cli;
use crate::error::Result;
use crate::operations::{CreateOperation, CreateOptions};
use crate::release::Release;
use crate::ui::ConsoleReporter;

/// Run the create command
pub fn run(cli: Cli) -> Result<()> {
    let release = Release::new(
        cli.version.as_str(),
        &cli.prev_version,
        cli.channel.as_str(),
        cli.namespace.as_str(),
    );
    let options = CreateOptions {
        overwrite: cli.overwrite_policy(),
        root: cli.manage_tenants_bundle_path,
        template: cli.template,
        dry_run: cli.dry_run,
    };

    let mut reporter = ConsoleReporter::new(cli.verbose);
    CreateOperation::new(options, &mut reporter).execute(&release)?;
    Ok(())
}
