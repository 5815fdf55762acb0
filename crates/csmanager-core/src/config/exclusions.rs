//! Directories that are never synced

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::fs_util::ensure_dir;

/// Names under the root written to a fresh exclusion list
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["Dropbox", "Nextcloud"];

const FILE_NAME: &str = "excl.lst";

/// Ordered set of absolute directory paths excluded from every sweep.
///
/// Membership is exact: `/home/u/Dropbox/` does not match `/home/u/Dropbox`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: Vec<PathBuf>,
}

impl ExclusionSet {
    /// Build a set from paths, dropping duplicates but keeping first-seen order
    #[must_use]
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut set = Self::default();
        for path in paths {
            set.insert(path);
        }
        set
    }

    /// Whether `path` is excluded, compared byte for byte
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths
            .iter()
            .any(|excluded| excluded.as_os_str() == path.as_os_str())
    }

    /// Append a path unless already present
    pub fn insert(&mut self, path: PathBuf) {
        if !self.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Excluded paths in file order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Number of excluded paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// The `excl.lst` file in a config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionStore {
    path: PathBuf,
}

impl ExclusionStore {
    /// Exclusion store inside `config_dir`
    #[must_use]
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(FILE_NAME),
        }
    }

    /// Location of the exclusion list
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the exclusion list, creating it with defaults under `root` first if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written or read.
    pub fn load(&self, root: &Path) -> Result<ExclusionSet> {
        if !self.path.exists() {
            self.write_defaults(root)?;
        }

        let lines = super::read_lines(&self.path)?;
        Ok(ExclusionSet::new(lines.into_iter().map(PathBuf::from)))
    }

    /// Write the default exclusion list and flush it to disk
    fn write_defaults(&self, root: &Path) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir)?;
        }

        let write_err = |e| Error::io(format!("Failed to write {}", self.path.display()), e);
        let mut file = File::create(&self.path).map_err(write_err)?;
        for name in DEFAULT_EXCLUSIONS {
            writeln!(file, "{}", root.join(name).display()).map_err(write_err)?;
        }
        file.sync_all().map_err(write_err)?;

        info!("Created default exclusion list {}", self.path.display());
        Ok(())
    }
}
