//! File system utilities

use crate::system::System;
use anyhow::{Context as _, Result};
use std::io;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
///
/// Already-exists is not an error; a non-directory in the way is.
pub fn ensure_dir_exists(system: &dyn System, dir_path: &Path) -> Result<()> {
    if !system.exists(dir_path) {
        system
            .create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;
    } else if !system.is_dir(dir_path) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir_path.display()),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn test_ensure_dir_exists_creates_nested_directories() {
        let system = MockSystem::new();

        assert!(ensure_dir_exists(&system, Path::new("/a/b/c")).is_ok());
        assert!(system.is_dir(Path::new("/a/b/c")));
    }

    #[test]
    fn test_ensure_dir_exists_is_idempotent() {
        let system = MockSystem::new().with_dir("/archive").unwrap();

        assert!(ensure_dir_exists(&system, Path::new("/archive")).is_ok());
        assert!(ensure_dir_exists(&system, Path::new("/archive/project")).is_ok());
        assert!(ensure_dir_exists(&system, Path::new("/archive/project")).is_ok());
        assert!(system.is_dir(Path::new("/archive/project")));
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file_in_the_way() {
        let system = MockSystem::new().with_file("/archive", b"oops").unwrap();

        assert!(ensure_dir_exists(&system, Path::new("/archive")).is_err());
    }
}
