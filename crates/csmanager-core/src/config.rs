//! Persisted configuration under `~/.config/<program>/`
//!
//! This module handles:
//! - The exclusion list (`excl.lst`), bootstrapped with defaults on first use
//! - The cloud target name (`target`), bootstrapped with `Nextcloud`
//!
//! Both files are plain newline-delimited text.

mod exclusions;
mod target;

pub use exclusions::{DEFAULT_EXCLUSIONS, ExclusionSet, ExclusionStore};
pub use target::{DEFAULT_CLOUD_TARGET, TargetStore};

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default program name used for the config directory
pub const PROGRAM_NAME: &str = "csmanager";

/// Entry point to the config directory of one program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Open the config store rooted at `dir`. Nothing is created until a file is loaded.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Config directory for `program_name` in the user's config home (`~/.config/<program>`).
    pub fn default_dir(program_name: &str) -> Result<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join(program_name))
            .ok_or(Error::NoHome)
    }

    /// Directory holding the config files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store for the exclusion list
    #[must_use]
    pub fn exclusions(&self) -> ExclusionStore {
        ExclusionStore::new(&self.dir)
    }

    /// Store for the cloud target name
    #[must_use]
    pub fn target(&self) -> TargetStore {
        TargetStore::new(&self.dir)
    }
}

/// Read a newline-delimited text file into its non-empty lines, order preserved.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_paths() {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path().join(PROGRAM_NAME));

        assert_eq!(store.dir(), tmp.path().join("csmanager"));
        assert_eq!(
            store.exclusions().path(),
            tmp.path().join("csmanager/excl.lst")
        );
        assert_eq!(store.target().path(), tmp.path().join("csmanager/target"));
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list");
        std::fs::write(&file, "one\n\ntwo\n").unwrap();

        assert_eq!(read_lines(&file).unwrap(), vec!["one", "two"]);
    }
}
