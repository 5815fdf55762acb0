//! Persisted name of the cloud target directory

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::fs_util::ensure_dir;

/// Cloud target written to a fresh `target` file
pub const DEFAULT_CLOUD_TARGET: &str = "Nextcloud";

const FILE_NAME: &str = "target";

/// The `target` file in a config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStore {
    path: PathBuf,
}

impl TargetStore {
    /// Target store inside `config_dir`
    #[must_use]
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(FILE_NAME),
        }
    }

    /// Location of the target file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cloud target name, creating the file with [`DEFAULT_CLOUD_TARGET`] if absent.
    ///
    /// Only the first non-blank line counts; surrounding whitespace is trimmed.
    pub fn load_or_init(&self) -> Result<String> {
        if !self.path.exists() {
            self.write(DEFAULT_CLOUD_TARGET)?;
        }

        let lines = super::read_lines(&self.path)?;
        let name = lines
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .unwrap_or_default();

        if name.is_empty() {
            return Err(Error::InvalidCloudTarget {
                name: String::new(),
            });
        }
        Ok(name.to_string())
    }

    fn write(&self, name: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir)?;
        }

        let write_err = |e| Error::io(format!("Failed to write {}", self.path.display()), e);
        let mut file = File::create(&self.path).map_err(write_err)?;
        writeln!(file, "{name}").map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        info!("Created cloud target config {}", self.path.display());
        Ok(())
    }
}
