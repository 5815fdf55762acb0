//! Sync orchestration - coordinates the sweeps of a run

use tracing::{debug, info};

use super::executor::ActionExecutor;
use super::planner::SyncPlanner;
use super::reporting::SWEEP_SEPARATOR;
use super::{SyncAction, SyncResult, SyncSource};
use crate::config::ExclusionSet;
use crate::context::RuntimeContext;
use crate::error::Result;
use crate::fs_util::ensure_dir;
use crate::scanner::{DirKind, DirectoryEntry, DirectoryEnumerator, ListFileReader};
use crate::tools::ExternalTools;
use crate::watermark::Watermark;

/// Main sync engine
pub struct SyncEngine<T> {
    ctx: RuntimeContext,
    tools: T,
    dry_run: bool,
}

impl<T: ExternalTools> SyncEngine<T> {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(ctx: RuntimeContext, tools: T) -> Self {
        Self {
            ctx,
            tools,
            dry_run: false,
        }
    }

    /// Plan and report without touching the filesystem or spawning tools
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Context of this run
    #[must_use]
    pub const fn context(&self) -> &RuntimeContext {
        &self.ctx
    }

    /// Tools actions are executed with
    #[must_use]
    pub const fn tools(&self) -> &T {
        &self.tools
    }

    /// Execute a run
    ///
    /// # Errors
    ///
    /// Returns an error if the directories to process cannot be determined,
    /// an entry cannot be mapped into the cloud target, a target directory
    /// cannot be created or the watermark cannot be read or written. Failing
    /// external tools are reported in the result instead.
    pub fn run(&mut self, source: &SyncSource) -> Result<SyncResult> {
        let mut result = SyncResult::default();

        match source {
            SyncSource::Master(sweep) => {
                let exclusions = self.load_exclusions()?;
                let enumerator = DirectoryEnumerator::new(&exclusions);

                info!("{SWEEP_SEPARATOR}");
                if sweep.includes_normal() {
                    let entries = enumerator.list(self.ctx.root(), DirKind::Normal)?;
                    result.merge(self.sync_normal(&entries)?);
                    info!("{SWEEP_SEPARATOR}");
                }
                if sweep.includes_dot() {
                    let entries = enumerator.list(self.ctx.root(), DirKind::Hidden)?;
                    result.merge(self.sync_dot(&entries)?);
                    info!("{SWEEP_SEPARATOR}");
                }
            }
            SyncSource::ListFile(list_file) => {
                let list_file = self.ctx.root().join(list_file);
                info!("Reading directories from {}", list_file.display());
                let entries = ListFileReader::new(self.ctx.root()).read(&list_file)?;
                result.merge(self.sync_normal(&entries)?);
            }
        }

        Ok(result)
    }

    /// Persisted exclusions plus the cloud target itself
    fn load_exclusions(&self) -> Result<ExclusionSet> {
        let mut exclusions = self.ctx.config().exclusions().load(self.ctx.root())?;
        exclusions.insert(self.ctx.cloud_target().to_path_buf());
        debug!("{} excluded paths", exclusions.len());
        Ok(exclusions)
    }

    /// Link every entry into the cloud target
    fn sync_normal(&mut self, entries: &[DirectoryEntry]) -> Result<SyncResult> {
        info!("Linking {} directories", entries.len());
        let plan = SyncPlanner::new(&self.ctx).plan_normal(entries)?;
        self.execute(&plan)
    }

    /// Archive the entries changed since the watermark, then advance it
    fn sync_dot(&mut self, entries: &[DirectoryEntry]) -> Result<SyncResult> {
        let sentinel = self.ctx.watermark_file();
        let mut watermark = if self.dry_run {
            Watermark::peek(sentinel)?
        } else {
            Watermark::load_or_seed(sentinel)?
        };

        info!("Checking {} hidden directories", entries.len());
        let plan = SyncPlanner::new(&self.ctx).plan_dot(entries, watermark.time())?;

        let mut result = SyncResult::default();
        if !self.dry_run && ensure_dir(self.ctx.dotfiles_dir())? {
            result.dirs_created += 1;
        }
        result.merge(self.execute(&plan)?);

        if !self.dry_run {
            let now = watermark.advance()?;
            debug!("Watermark advanced to {:?}", now);
        }
        Ok(result)
    }

    fn execute(&mut self, plan: &[SyncAction]) -> Result<SyncResult> {
        let executor = ActionExecutor::new(self.dry_run);
        let mut result = SyncResult::default();
        for action in plan {
            executor.execute(action, &mut self.tools, &mut result)?;
        }
        Ok(result)
    }
}
