//! Sync planning and execution
//!
//! A run takes its directories either from the master directory (the root)
//! or from a list file. Normal directories are hard-linked into the cloud
//! target on every run; hidden directories are archived only when something
//! below them changed since the watermark.

mod actions;
mod executor;
mod orchestrator;
mod planner;
mod reporting;

#[cfg(test)]
pub(crate) mod recording;

use std::path::PathBuf;

pub use actions::{SyncAction, tarball_name};
pub use executor::ActionExecutor;
pub use orchestrator::SyncEngine;
pub use planner::SyncPlanner;
pub use reporting::{SWEEP_SEPARATOR, SyncReporter};

use crate::error::{Error, Result};

/// Which sweeps a master-directory run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sweep {
    /// Normal dirs, then dot dirs
    #[default]
    All,
    /// Only link normal dirs
    NormalOnly,
    /// Only archive changed dot dirs
    DotOnly,
}

impl Sweep {
    /// Whether normal directories are linked
    #[must_use]
    pub const fn includes_normal(self) -> bool {
        matches!(self, Self::All | Self::NormalOnly)
    }

    /// Whether hidden directories are archived
    #[must_use]
    pub const fn includes_dot(self) -> bool {
        matches!(self, Self::All | Self::DotOnly)
    }
}

/// Where the directories of a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncSource {
    /// Children of the root, filtered by the exclusion list
    Master(Sweep),
    /// Directories named in a list file (normal sweep only)
    ListFile(PathBuf),
}

impl SyncSource {
    /// Validate option combinations before anything touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if a list file is combined with an explicit
    /// root or with a dot-dirs sweep.
    pub fn from_options(
        list_file: Option<PathBuf>,
        root_given: bool,
        sweep: Sweep,
    ) -> Result<Self> {
        let Some(list_file) = list_file else {
            return Ok(Self::Master(sweep));
        };

        if root_given {
            return Err(Error::Conflict(
                "--dirs-from cannot be combined with a root directory argument".to_string(),
            ));
        }
        if sweep == Sweep::DotOnly {
            return Err(Error::Conflict(
                "--dirs-from cannot be combined with --dot-files".to_string(),
            ));
        }
        Ok(Self::ListFile(list_file))
    }
}

/// Synchronization result with statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Directories handed to the linker successfully
    pub linked: usize,
    /// Dot dirs archived successfully
    pub archived: usize,
    /// Dot dirs unchanged since the watermark
    pub unchanged: usize,
    /// Target or staging directories created
    pub dirs_created: usize,
    /// Non-fatal failures of external actions
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Total operations performed
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.linked + self.archived
    }

    /// Whether sync was successful (no errors)
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fold the result of another sweep into this one
    pub fn merge(&mut self, other: Self) {
        self.linked += other.linked;
        self.archived += other.archived;
        self.unchanged += other.unchanged;
        self.dirs_created += other.dirs_created;
        self.errors.extend(other.errors);
    }
}
