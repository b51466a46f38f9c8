//! Timestamped backups of the config file before mutation
//!
//! Every run that may rewrite an existing `.eslintrc` first copies its
//! verbatim bytes into a per-project archive directory, named after
//! the project and the current local time.

use crate::error::EsbnbError;
use crate::system::System;
use crate::utils::fs::ensure_dir_exists;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Timestamp layout used in backup file names
const TIMESTAMP_FORMAT: &str = "%m.%d.%Y.%H.%M.%S";

/// Root of the backup archive for the current user
///
/// Prefers the per-user data directory, falling back to the home
/// directory and finally the current directory.
#[must_use]
pub fn archive_root() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("esbnb")
}

/// Compute the archive path for one backup
///
/// Layout: `<root>/configs/<project>/<project>.<timestamp>.eslintrc`.
#[must_use]
pub fn backup_path(root: &Path, project: &str, now: &DateTime<Local>) -> PathBuf {
    let stamp = now.format(TIMESTAMP_FORMAT);
    root.join("configs")
        .join(project)
        .join(format!("{project}.{stamp}.eslintrc"))
}

/// Copy the config file into the archive before it is mutated
///
/// The per-project directory is created first if missing; an existing
/// directory is not an error. Returns the path of the stored copy.
///
/// # Errors
///
/// Returns `EsbnbError::Persistence` if the archive directory cannot
/// be created or the copy fails.
pub fn backup_eslintrc(
    system: &dyn System,
    root: &Path,
    project: &str,
    source: &Path,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    let destination = backup_path(root, project, now);

    if let Some(parent) = destination.parent() {
        ensure_dir_exists(system, parent)?;
    }

    system.copy(source, &destination).map_err(|e| {
        EsbnbError::persistence(format!(
            "Failed to back up {} to {}: {e}",
            source.display(),
            destination.display()
        ))
    })?;

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;
    use chrono::TimeZone as _;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_backup_path_layout() {
        let path = backup_path(Path::new("/data/esbnb"), "my-project", &fixed_now());
        assert_eq!(
            path,
            Path::new("/data/esbnb/configs/my-project/my-project.03.07.2024.14.30.05.eslintrc")
        );
    }

    #[test]
    fn test_backup_copies_verbatim_bytes() {
        let contents = br#"{"extends": "airbnb-base"}"#;
        let system = MockSystem::new()
            .with_file("/project/.eslintrc", contents)
            .unwrap();

        let stored = backup_eslintrc(
            &system,
            Path::new("/data/esbnb"),
            "my-project",
            Path::new("/project/.eslintrc"),
            &fixed_now(),
        )
        .unwrap();

        assert_eq!(
            system.file_contents(&stored).unwrap().unwrap(),
            contents.to_vec()
        );
    }

    #[test]
    fn test_backup_creates_project_directory_once() {
        let system = MockSystem::new()
            .with_file("/project/.eslintrc", b"{}")
            .unwrap()
            .with_dir("/data/esbnb/configs/my-project")
            .unwrap();

        // Directory already exists: not an error
        let stored = backup_eslintrc(
            &system,
            Path::new("/data/esbnb"),
            "my-project",
            Path::new("/project/.eslintrc"),
            &fixed_now(),
        )
        .unwrap();

        assert!(system.is_file(&stored));
    }

    #[test]
    fn test_backup_of_missing_source_fails() {
        let system = MockSystem::new();

        let err = backup_eslintrc(
            &system,
            Path::new("/data/esbnb"),
            "my-project",
            Path::new("/project/.eslintrc"),
            &fixed_now(),
        )
        .unwrap_err();

        let err = err.downcast::<EsbnbError>().unwrap();
        assert!(matches!(err, EsbnbError::Persistence { .. }));
    }
}
