use clap::Parser;
use csmanager_core::tools::{DEFAULT_ARCHIVER, DEFAULT_LINKER};
use std::path::PathBuf;

/// Cloud Staging Manager
///
/// Hard-link the directories under ROOT into a cloud sync folder and archive
/// hidden directories that changed since the last run
#[derive(Parser, Debug)]
#[command(name = "csmanager")]
#[command(long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Link only the directories listed in FILE (absolute or relative to the root, one per line)
    #[arg(short = 'd', long, value_name = "FILE")]
    pub dirs_from: Option<PathBuf>,

    /// Staging directory for dot-dir archives inside the cloud target [default: Dotty]
    #[arg(short = 'f', long, value_name = "DIR")]
    pub dot_files_dir: Option<PathBuf>,

    /// Cloud sync directory under the root, overriding the persisted target
    #[arg(short = 'c', long, value_name = "NAME")]
    pub cloud_target: Option<String>,

    /// Only archive changed dot dirs
    #[arg(short = 'D', long, conflicts_with = "no_dot_files")]
    pub dot_files: bool,

    /// Only link normal dirs
    #[arg(short = 'N', long)]
    pub no_dot_files: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Hard-linking synchronizer, invoked as `<linker> -v <source> <target>`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LINKER)]
    pub linker: PathBuf,

    /// Archiver, invoked as `<archiver> -czf <tarball> -C <parent> <name>`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ARCHIVER)]
    pub archiver: PathBuf,

    /// Master directory to sync from [default: home directory]
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["csmanager"]).unwrap();

        assert_eq!(cli.linker, PathBuf::from(DEFAULT_LINKER));
        assert_eq!(cli.archiver, PathBuf::from(DEFAULT_ARCHIVER));
        assert!(cli.root.is_none());
        assert!(!cli.dot_files && !cli.no_dot_files);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "csmanager", "-d", "dirs.lst", "-f", "Dots", "-c", "Box", "-N",
        ])
        .unwrap();

        assert_eq!(cli.dirs_from, Some(PathBuf::from("dirs.lst")));
        assert_eq!(cli.dot_files_dir, Some(PathBuf::from("Dots")));
        assert_eq!(cli.cloud_target.as_deref(), Some("Box"));
        assert!(cli.no_dot_files);
    }

    #[test]
    fn test_sweep_flags_conflict() {
        assert!(Cli::try_parse_from(["csmanager", "-D", "-N"]).is_err());
    }
}
