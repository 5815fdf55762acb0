//! Run-wide context resolved once at startup
//!
//! Every environment lookup (home directory, config home) happens here; the
//! components downstream only ever see the resolved [`RuntimeContext`].

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigStore, PROGRAM_NAME};
use crate::error::{Error, Result};

/// Default dotfiles staging directory, relative to the cloud target
pub const DEFAULT_DOTFILES_DIR: &str = "Dotty";

/// Sentinel file in the home directory whose mtime is the watermark
pub const WATERMARK_FILE: &str = "dottim";

/// Inputs for [`RuntimeContext::resolve`]. `None` falls back to config or defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// Program name, used for the config directory
    pub program_name: String,
    /// Source root (default: home directory)
    pub root: Option<PathBuf>,
    /// Home directory override (default: `dirs::home_dir`)
    pub home: Option<PathBuf>,
    /// Config directory override (default: `~/.config/<program_name>`)
    pub config_dir: Option<PathBuf>,
    /// Cloud target name override (default: persisted `target` file)
    pub cloud_target: Option<String>,
    /// Dotfiles staging directory override, relative to the cloud target
    pub dot_files_dir: Option<PathBuf>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            program_name: PROGRAM_NAME.to_string(),
            root: None,
            home: None,
            config_dir: None,
            cloud_target: None,
            dot_files_dir: None,
        }
    }
}

/// Immutable description of one sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeContext {
    home: PathBuf,
    root: PathBuf,
    cloud_target: PathBuf,
    dotfiles_dir: PathBuf,
    config: ConfigStore,
    watermark_file: PathBuf,
}

impl RuntimeContext {
    /// Resolve the context from options, the environment and persisted config.
    ///
    /// The cloud target name is read from (and on first use written to) the
    /// config directory unless given in `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown, the root is missing
    /// or not a directory, or the cloud target name is not a single segment.
    pub fn resolve(options: &ContextOptions) -> Result<Self> {
        let home = match &options.home {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or(Error::NoHome)?,
        };

        let root = canonical_dir(options.root.as_deref().unwrap_or(&home))?;

        let config_dir = match &options.config_dir {
            Some(dir) => dir.clone(),
            None => ConfigStore::default_dir(&options.program_name)?,
        };
        let config = ConfigStore::new(config_dir);

        let target_name = match &options.cloud_target {
            Some(name) => name.clone(),
            None => config.target().load_or_init()?,
        };
        let cloud_target = root.join(single_segment(&target_name)?);
        let dotfiles_dir = cloud_target.join(inner_path(
            options
                .dot_files_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_DOTFILES_DIR)),
        )?);
        let watermark_file = home.join(WATERMARK_FILE);

        debug!(
            "root={} cloud_target={} dotfiles={}",
            root.display(),
            cloud_target.display(),
            dotfiles_dir.display()
        );

        Ok(Self {
            home,
            root,
            cloud_target,
            dotfiles_dir,
            config,
            watermark_file,
        })
    }

    /// User's home directory
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Canonical source root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute cloud target, always a direct child of the root
    #[must_use]
    pub fn cloud_target(&self) -> &Path {
        &self.cloud_target
    }

    /// Directory receiving dot-dir tarballs
    #[must_use]
    pub fn dotfiles_dir(&self) -> &Path {
        &self.dotfiles_dir
    }

    /// Persisted configuration files
    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Sentinel file holding the watermark
    #[must_use]
    pub fn watermark_file(&self) -> &Path {
        &self.watermark_file
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(Error::MissingDirectory {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    dunce::canonicalize(path)
        .map_err(|e| Error::io(format!("Failed to resolve {}", path.display()), e))
}

/// The one normal component of `name`; `Nextcloud/` yields `Nextcloud`.
fn single_segment(name: &str) -> Result<&OsStr> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) => Ok(segment),
        _ => Err(Error::InvalidCloudTarget {
            name: name.to_string(),
        }),
    }
}

/// `dir` if it only has normal components, so joining it cannot leave the base.
fn inner_path(dir: &Path) -> Result<&Path> {
    let mut components = dir.components().peekable();
    if components.peek().is_none() || !components.all(|c| matches!(c, Component::Normal(_))) {
        return Err(Error::InvalidDotFilesDir {
            path: dir.to_path_buf(),
        });
    }
    Ok(dir)
}
