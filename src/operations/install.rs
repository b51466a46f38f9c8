//! Install operation coordination
//!
//! Drives the full pipeline for one invocation: read the project
//! descriptor, install the selected package through npm, back up any
//! existing config file, merge the chosen config into its `extends`
//! field, and persist the result.

use crate::config::flavor::{CANONICAL_EXTENDS, Selection};
use crate::config::{ESLINTRC, load_eslintrc, merge::merge, save_eslintrc};
use crate::operations::backup::{archive_root, backup_eslintrc};
use crate::operations::npm;
use crate::project::{PACKAGE_JSON, read_project_name};
use crate::system::System;
use anyhow::Result;
use chrono::Local;
use std::path::Path;
use tracing::{debug, info};

/// Coordinates the complete install operation
#[non_exhaustive]
pub struct InstallOperation<'src> {
    selection: Selection,
    dry_run: bool,
    system: &'src dyn System,
}

impl<'src> InstallOperation<'src> {
    /// Create a new install operation for a resolved flavor selection
    #[must_use]
    #[inline]
    pub fn new(selection: Selection, dry_run: bool, system: &'src dyn System) -> Self {
        Self {
            selection,
            dry_run,
            system,
        }
    }

    /// Execute the install operation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project descriptor is missing or unreadable
    /// - npm fails to install the selected package
    /// - The config file cannot be merged or persisted
    #[inline]
    pub fn execute(&self) -> Result<()> {
        // Not an npm project without a package.json; abort before
        // touching npm or any file
        let project = read_project_name(self.system, PACKAGE_JSON)?;
        debug!("Project name: {}", project);

        if self.dry_run {
            return self.preview(&project);
        }

        info!(
            "esbnb is installing \"{}\" config...",
            self.selection.extend
        );

        let mut specs = vec![self.selection.package.clone()];
        specs.extend(npm::peer_dependencies(&self.selection.package)?);
        debug!("Install specs: {:?}", specs);

        let installed = npm::install(&specs)?;
        info!("Installed: {}", installed.join(", "));

        info!("esbnb is configuring \"{}\" file...", ESLINTRC);
        configure_eslintrc(self.system, &project, self.selection.extend)?;

        info!(
            "eslint with \"{}\" config is ready to use.",
            self.selection.extend
        );

        Ok(())
    }

    /// Preview operations without executing them
    fn preview(&self, project: &str) -> Result<()> {
        info!("Dry run preview - nothing will be installed or modified:");
        info!("");
        info!(
            "  Would install \"{}\" with its peer dependencies (--save-dev)",
            self.selection.package
        );

        if self.system.is_file(Path::new(ESLINTRC)) {
            info!(
                "  Would back up \"{}\" under {}",
                ESLINTRC,
                archive_root().join("configs").join(project).display()
            );
            info!(
                "  Would merge \"{}\" into the extends field of \"{}\"",
                self.selection.extend, ESLINTRC
            );
        } else {
            info!(
                "  Would create \"{}\" extending \"{}\"",
                ESLINTRC, self.selection.extend
            );
        }

        info!("");
        info!("Run without --dry-run to execute these operations.");

        Ok(())
    }
}

/// Merge `target` into the project's `.eslintrc`, backing up first
///
/// An existing file is copied into the archive before anything else,
/// then loaded, merged, and rewritten only when the merge changed it.
/// When no file exists a fresh one is created (no backup). Returns
/// whether the document on disk was written.
///
/// # Errors
///
/// Returns an error if:
/// - The backup copy fails
/// - The existing file is not valid JSON, not an object, or holds an
///   `extends` value that is neither a string nor an array
/// - The merged document cannot be written
pub fn configure_eslintrc(system: &dyn System, project: &str, target: &str) -> Result<bool> {
    let path = Path::new(ESLINTRC);

    if system.is_file(path) {
        // Copy the pre-mutation bytes aside before any change
        let root = archive_root();
        let stored = backup_eslintrc(system, &root, project, path, &Local::now())?;
        debug!("Backed up \"{}\" to {}", ESLINTRC, stored.display());

        let doc = load_eslintrc(system, ESLINTRC)?;
        let outcome = merge(doc, target, &CANONICAL_EXTENDS, ESLINTRC)?;

        if outcome.changed {
            save_eslintrc(system, ESLINTRC, &outcome.doc)?;
            info!("\"{}\" has been updated and configured", ESLINTRC);
            Ok(true)
        } else {
            // Leave the user's bytes exactly as they were
            info!("\"{}\" already has proper configuration", ESLINTRC);
            Ok(false)
        }
    } else {
        let outcome = merge(None, target, &CANONICAL_EXTENDS, ESLINTRC)?;
        save_eslintrc(system, ESLINTRC, &outcome.doc)?;
        info!("\"{}\" has been created and configured.", ESLINTRC);
        Ok(true)
    }
}
