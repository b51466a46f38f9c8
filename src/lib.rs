//! `esbnb` - A CLI tool for installing ESLint with the Airbnb shareable configs
//!
//! This library installs one of the `eslint-config-airbnb*` packages
//! (with its peer dependencies) and wires the matching config name
//! into the project's `.eslintrc` `extends` field, backing up any
//! pre-existing config file first.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod project;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::Args;
use config::flavor;
use operations::install::InstallOperation;
use system::RealSystem;
use tracing::debug;

/// Main entry point for the esbnb library
///
/// An unknown config name is a help request, not an error: the help
/// screen is printed and the run ends successfully without touching
/// npm or any file.
///
/// # Errors
///
/// Returns an error if:
/// - The project descriptor is missing or unreadable
/// - npm fails to install the selected package
/// - The config file cannot be merged or persisted
pub fn run(args: Args) -> Result<()> {
    let selection = match flavor::select(args.mode.as_deref()) {
        Ok(selection) => selection,
        Err(err) => {
            debug!("{}", err);
            cli::print_help();
            return Ok(());
        }
    };

    let system = RealSystem;
    let install_operation = InstallOperation::new(selection, args.dry_run, &system);
    install_operation.execute()
}
