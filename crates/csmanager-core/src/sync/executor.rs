//! Sync action executor

use std::path::Path;

use tracing::{debug, info, warn};

use super::SyncResult;
use super::actions::SyncAction;
use crate::error::Result;
use crate::fs_util::ensure_dir;
use crate::tools::ExternalTools;

/// Executes planned actions through the external tools
pub struct ActionExecutor {
    dry_run: bool,
}

impl ActionExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a sync action
    ///
    /// A failing linker or archiver is recorded in `result` and does not stop
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns an error if a target directory cannot be created.
    pub fn execute<T: ExternalTools>(
        &self,
        action: &SyncAction,
        tools: &mut T,
        result: &mut SyncResult,
    ) -> Result<()> {
        match action {
            SyncAction::Link { source, target } => {
                if self.dry_run {
                    info!(
                        "[DRY RUN] Would link: {} -> {}",
                        source.display(),
                        target.display()
                    );
                    result.linked += 1;
                    return Ok(());
                }

                Self::prepare_dir(target, result)?;
                info!("Linking {} -> {}", source.display(), target.display());
                match tools.link(source, target) {
                    Ok(()) => result.linked += 1,
                    Err(e) => Self::record_failure(source, &e.to_string(), result),
                }
            }
            SyncAction::Archive { source, tarball } => {
                if self.dry_run {
                    info!(
                        "[DRY RUN] Would archive: {} -> {}",
                        source.display(),
                        tarball.display()
                    );
                    result.archived += 1;
                    return Ok(());
                }

                if let Some(parent) = tarball.parent() {
                    Self::prepare_dir(parent, result)?;
                }
                info!("Archiving {} -> {}", source.display(), tarball.display());
                match tools.archive(source, tarball) {
                    Ok(()) => result.archived += 1,
                    Err(e) => Self::record_failure(source, &e.to_string(), result),
                }
            }
            SyncAction::Skip { path, reason } => {
                debug!("Skipping {} ({reason})", path.display());
                result.unchanged += 1;
            }
        }
        Ok(())
    }

    fn prepare_dir(dir: &Path, result: &mut SyncResult) -> Result<()> {
        if ensure_dir(dir)? {
            debug!("Created {}", dir.display());
            result.dirs_created += 1;
        }
        Ok(())
    }

    fn record_failure(source: &Path, error: &str, result: &mut SyncResult) {
        warn!("{}: {error}", source.display());
        result.errors.push(format!("{}: {error}", source.display()));
    }
}
