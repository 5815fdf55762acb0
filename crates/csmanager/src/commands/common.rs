//! Common types and utilities for command execution

use std::path::Path;

use csmanager_core::sync::Sweep;

use crate::cli::Cli;

/// Execution options for a sync run
pub struct SyncOptions<'a> {
    /// Master directory given on the command line
    pub root: Option<&'a Path>,
    /// List file to read directories from
    pub dirs_from: Option<&'a Path>,
    /// Cloud target override
    pub cloud_target: Option<&'a str>,
    /// Dotfiles staging directory override
    pub dot_files_dir: Option<&'a Path>,
    /// Sweeps of a master-directory run
    pub sweep: Sweep,
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
    /// Linker program
    pub linker: &'a Path,
    /// Archiver program
    pub archiver: &'a Path,
}

impl<'a> SyncOptions<'a> {
    /// Options for the command line in `cli`
    #[must_use]
    pub fn from_cli(cli: &'a Cli) -> Self {
        Self {
            root: cli.root.as_deref(),
            dirs_from: cli.dirs_from.as_deref(),
            cloud_target: cli.cloud_target.as_deref(),
            dot_files_dir: cli.dot_files_dir.as_deref(),
            sweep: sweep(cli.dot_files, cli.no_dot_files),
            dry_run: cli.dry_run,
            linker: &cli.linker,
            archiver: &cli.archiver,
        }
    }
}

const fn sweep(dot_files: bool, no_dot_files: bool) -> Sweep {
    match (dot_files, no_dot_files) {
        (true, _) => Sweep::DotOnly,
        (false, true) => Sweep::NormalOnly,
        (false, false) => Sweep::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_sweep_selection() {
        assert_eq!(sweep(false, false), Sweep::All);
        assert_eq!(sweep(true, false), Sweep::DotOnly);
        assert_eq!(sweep(false, true), Sweep::NormalOnly);
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["csmanager", "--dry-run", "-D", "/srv/data"]).unwrap();
        let options = SyncOptions::from_cli(&cli);

        assert_eq!(options.root, Some(Path::new("/srv/data")));
        assert_eq!(options.sweep, Sweep::DotOnly);
        assert!(options.dry_run);
        assert!(options.dirs_from.is_none());
    }
}
