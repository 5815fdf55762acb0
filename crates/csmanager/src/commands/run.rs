use anyhow::Context;
use csmanager_core::sync::{SyncEngine, SyncReporter, SyncSource};
use csmanager_core::tools::CommandTools;
use csmanager_core::{ContextOptions, RuntimeContext};
use tracing::debug;

use super::SyncOptions;

pub struct Run;

impl Run {
    pub fn execute(options: &SyncOptions) -> anyhow::Result<()> {
        // option conflicts are reported before anything is created
        let source = SyncSource::from_options(
            options.dirs_from.map(Into::into),
            options.root.is_some(),
            options.sweep,
        )?;

        let ctx = RuntimeContext::resolve(&ContextOptions {
            root: options.root.map(Into::into),
            cloud_target: options.cloud_target.map(Into::into),
            dot_files_dir: options.dot_files_dir.map(Into::into),
            ..ContextOptions::default()
        })
        .context("Failed to resolve run context")?;

        debug!("Root: {}", ctx.root().display());
        debug!("Cloud target: {}", ctx.cloud_target().display());
        debug!("Dotfiles dir: {}", ctx.dotfiles_dir().display());
        debug!("Config dir: {}", ctx.config().dir().display());

        let tools = CommandTools::new()
            .with_linker(options.linker)
            .with_archiver(options.archiver);
        let mut engine = SyncEngine::new(ctx, tools).with_dry_run(options.dry_run);

        let result = engine.run(&source).context("Sync operation failed")?;

        let summary = SyncReporter::generate_summary(&result);
        println!("{summary}");

        Ok(())
    }
}
