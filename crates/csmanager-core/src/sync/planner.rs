//! Turns directory entries into sync actions

use std::path::PathBuf;
use std::time::SystemTime;

use tracing::{debug, warn};

use super::actions::{SyncAction, tarball_name};
use crate::comparison::StalenessDetector;
use crate::context::RuntimeContext;
use crate::error::Result;
use crate::mapping::PathMapper;
use crate::scanner::DirectoryEntry;

/// Plans the normal-dirs and dot-dirs sweeps of a run.
///
/// Planning only reads the filesystem; nothing is created or spawned here.
pub struct SyncPlanner<'a> {
    ctx: &'a RuntimeContext,
    mapper: PathMapper<'a>,
}

impl<'a> SyncPlanner<'a> {
    /// Planner for the run described by `ctx`
    #[must_use]
    pub fn new(ctx: &'a RuntimeContext) -> Self {
        Self {
            ctx,
            mapper: PathMapper::for_context(ctx),
        }
    }

    /// One link action per entry, in entry order.
    ///
    /// Every directory is linked on every run; the linker is incremental.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be mapped into the cloud target,
    /// so a bad entry never yields a partial plan.
    pub fn plan_normal(&self, entries: &[DirectoryEntry]) -> Result<Vec<SyncAction>> {
        entries
            .iter()
            .map(|entry| {
                Ok(SyncAction::Link {
                    source: entry.path.clone(),
                    target: self.mapper.map_to_target(&entry.path)?,
                })
            })
            .collect()
    }

    /// An archive action for every entry changed after `watermark`, a skip otherwise.
    ///
    /// A tree that cannot be fully read is archived anyway, leaving the
    /// archiver to report what it cannot access.
    ///
    /// # Errors
    ///
    /// Fails if an entry is not below the root.
    pub fn plan_dot(
        &self,
        entries: &[DirectoryEntry],
        watermark: SystemTime,
    ) -> Result<Vec<SyncAction>> {
        entries
            .iter()
            .map(|entry| {
                let dirty = StalenessDetector::is_dirty(&entry.path, watermark).unwrap_or_else(|e| {
                    warn!("{e}; archiving {} anyway", entry.path.display());
                    true
                });

                if dirty {
                    Ok(SyncAction::Archive {
                        source: entry.path.clone(),
                        tarball: self.archive_path(entry)?,
                    })
                } else {
                    debug!("Unchanged: {}", entry.path.display());
                    Ok(SyncAction::Skip {
                        path: entry.path.clone(),
                        reason: "unchanged since last sweep".to_string(),
                    })
                }
            })
            .collect()
    }

    /// Where the tarball of a hidden directory goes
    ///
    /// # Errors
    ///
    /// Fails if the entry is not below the root.
    pub fn archive_path(&self, entry: &DirectoryEntry) -> Result<PathBuf> {
        let relative = self.mapper.relative(&entry.path)?;
        Ok(self.ctx.dotfiles_dir().join(tarball_name(relative)))
    }
}
