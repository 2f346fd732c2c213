//! Path resolution for psysafe configuration and data files.
//!
//! All psysafe data is stored in `~/.psysafe/`:
//! - `config.yaml` - Main configuration file
//! - `psysafe.db` - `SQLite` database for diary, boundaries and defense plan

use std::path::PathBuf;

use crate::error::PsySafeError;

/// Paths to psysafe configuration and data.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.psysafe/`
    pub root: PathBuf,
    /// Config file: `~/.psysafe/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.psysafe/psysafe.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PsySafeError> {
        let home = std::env::var("HOME").map_err(|_| {
            PsySafeError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".psysafe")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("psysafe.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PsySafeError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PsySafeError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-psysafe");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("psysafe.db"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".psysafe"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
