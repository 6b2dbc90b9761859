//! addon-bundle - release bundle generator for nvidia-gpu-addon
//!
//! Copies a template operator bundle into a managed-tenants-bundles checkout
//! under a new version and stamps that version into its package annotations
//! and cluster service version.

use clap::Parser;
use miette::Diagnostic;

mod bundle;
mod cli;
mod commands;
mod common;
mod error;
mod layout;
mod manifest;
mod operations;
mod release;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::create::run(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
