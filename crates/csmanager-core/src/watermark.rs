//! Timestamp of the last completed dot-dir sweep
//!
//! The watermark is the mtime of a zero-byte sentinel file (`~/dottim`). A
//! missing sentinel is created dated at the epoch so that every hidden
//! directory counts as changed on the first sweep.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::comparison::TimestampComparator;
use crate::error::{Error, Result};

/// Persisted sweep timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watermark {
    sentinel: PathBuf,
    time: SystemTime,
}

impl Watermark {
    /// Read the watermark from `sentinel`, seeding it at the epoch if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the sentinel cannot be created or stat'ed.
    pub fn load_or_seed(sentinel: &Path) -> Result<Self> {
        if !sentinel.exists() {
            Self::touch(sentinel, UNIX_EPOCH, true)?;
            info!("Seeded watermark {} at the epoch", sentinel.display());
        }

        let time = TimestampComparator::get_modified_time(sentinel)?;
        debug!("Watermark {} = {:?}", sentinel.display(), time);

        Ok(Self {
            sentinel: sentinel.to_path_buf(),
            time,
        })
    }

    /// Read the watermark without creating anything; a missing sentinel reads as the epoch.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing sentinel cannot be stat'ed.
    pub fn peek(sentinel: &Path) -> Result<Self> {
        let time = if sentinel.exists() {
            TimestampComparator::get_modified_time(sentinel)?
        } else {
            UNIX_EPOCH
        };

        Ok(Self {
            sentinel: sentinel.to_path_buf(),
            time,
        })
    }

    /// Time of the last completed sweep
    #[must_use]
    pub const fn time(&self) -> SystemTime {
        self.time
    }

    /// Sentinel file backing this watermark
    #[must_use]
    pub fn sentinel(&self) -> &Path {
        &self.sentinel
    }

    /// Move the watermark to now, after a sweep has completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sentinel's mtime cannot be updated.
    pub fn advance(&mut self) -> Result<SystemTime> {
        let now = SystemTime::now();
        Self::touch(&self.sentinel, now, false)?;
        self.time = now;
        Ok(now)
    }

    fn touch(path: &Path, time: SystemTime, create: bool) -> Result<()> {
        let file: File = OpenOptions::new()
            .write(true)
            .create(create)
            .truncate(false)
            .open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        file.set_modified(time)
            .map_err(|e| Error::io(format!("Failed to set timestamp on {}", path.display()), e))
    }
}
