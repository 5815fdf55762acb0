//! Recursive "changed since the watermark" check for hidden directories

use std::path::Path;
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

use super::TimestampComparator;
use crate::error::{Error, Result};

/// Decides whether a directory tree changed after a given time
pub struct StalenessDetector;

impl StalenessDetector {
    /// Whether `dir`, or any file or directory below it, has an mtime strictly
    /// after `watermark`.
    ///
    /// The walk is depth-first and stops at the first newer entry. The
    /// directory's own mtime counts, so an entry that was added and removed
    /// again still marks it dirty. Symlinks and special files are ignored and
    /// symlinked directories are not descended into.
    ///
    /// # Errors
    ///
    /// Returns an error if part of the tree cannot be read.
    pub fn is_dirty(dir: &Path, watermark: SystemTime) -> Result<bool> {
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = entry.map_err(|source| Error::Walk {
                path: dir.to_path_buf(),
                source,
            })?;

            let file_type = entry.file_type();
            if !(file_type.is_dir() || file_type.is_file()) {
                continue;
            }

            let metadata = entry.metadata().map_err(|source| Error::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            let modified = TimestampComparator::modified(&metadata, entry.path())?;

            if modified > watermark {
                debug!("{} changed since last sweep", entry.path().display());
                return Ok(true);
            }
        }

        Ok(false)
    }
}
