//! File timestamp comparison for determining recency

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Timestamp comparator
pub struct TimestampComparator;

impl TimestampComparator {
    /// Get the modification time of a path, without following a final symlink
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read.
    pub fn get_modified_time(path: &Path) -> Result<SystemTime> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| Error::io(format!("Failed to read metadata for: {}", path.display()), e))?;

        Self::modified(&metadata, path)
    }

    /// Modification time from already-fetched metadata
    pub(crate) fn modified(metadata: &fs::Metadata, path: &Path) -> Result<SystemTime> {
        metadata.modified().map_err(|e| {
            Error::io(
                format!("Failed to get modification time for: {}", path.display()),
                e,
            )
        })
    }

    /// Whether `path` was modified strictly after `watermark`
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read.
    pub fn is_newer_than(path: &Path, watermark: SystemTime) -> Result<bool> {
        Ok(Self::get_modified_time(path)? > watermark)
    }
}
