//! External link and archive tools
//!
//! csmanager never copies file contents itself. Mirroring is delegated to a
//! hard-linking synchronizer (`synclink`) and archiving to `tar`; both sit
//! behind [`ExternalTools`] so planning can be exercised without spawning
//! processes.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

/// Default hard-linking synchronizer
pub const DEFAULT_LINKER: &str = "/usr/local/bin/synclink";

/// Default archiver
pub const DEFAULT_ARCHIVER: &str = "tar";

/// Failure of a single external action. Never fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The tool could not be started
    #[error("failed to run {}: {source}", tool.display())]
    Spawn {
        /// Program that failed to start
        tool: PathBuf,
        /// System error
        #[source]
        source: io::Error,
    },

    /// The tool ran and reported failure
    #[error("{} exited with {status}", tool.display())]
    Failed {
        /// Program that failed
        tool: PathBuf,
        /// Exit status
        status: ExitStatus,
    },
}

/// Capability to perform the actions a sync plan requests
pub trait ExternalTools {
    /// Hard-link every file under `source` into `target`, which already exists.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the linker fails.
    fn link(&mut self, source: &Path, target: &Path) -> Result<(), ToolError>;

    /// Write a compressed archive of `source` to `tarball`, whose parent already exists.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the archiver fails.
    fn archive(&mut self, source: &Path, tarball: &Path) -> Result<(), ToolError>;
}

/// [`ExternalTools`] backed by child processes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTools {
    linker: PathBuf,
    linker_args: Vec<OsString>,
    archiver: PathBuf,
}

impl Default for CommandTools {
    fn default() -> Self {
        Self {
            linker: PathBuf::from(DEFAULT_LINKER),
            linker_args: vec![OsString::from("-v")],
            archiver: PathBuf::from(DEFAULT_ARCHIVER),
        }
    }
}

impl CommandTools {
    /// Tools using the default linker and archiver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different linker program
    #[must_use]
    pub fn with_linker(mut self, linker: impl Into<PathBuf>) -> Self {
        self.linker = linker.into();
        self
    }

    /// Use a different archiver program (must accept tar's `-czf FILE -C DIR NAME`)
    #[must_use]
    pub fn with_archiver(mut self, archiver: impl Into<PathBuf>) -> Self {
        self.archiver = archiver.into();
        self
    }

    /// `synclink -v <source> <target>`
    fn link_command(&self, source: &Path, target: &Path) -> Command {
        let mut cmd = Command::new(&self.linker);
        cmd.args(&self.linker_args).arg(source).arg(target);
        cmd
    }

    /// `tar -czf <tarball> -C <parent> <name>`, so the archive holds relative paths
    fn archive_command(&self, source: &Path, tarball: &Path) -> Command {
        let mut cmd = Command::new(&self.archiver);
        cmd.arg("-czf").arg(tarball);
        match (source.parent(), source.file_name()) {
            (Some(parent), Some(name)) => {
                cmd.arg("-C").arg(parent).arg(name);
            }
            _ => {
                cmd.arg(source);
            }
        }
        cmd
    }

    fn run(tool: &Path, mut cmd: Command) -> Result<(), ToolError> {
        debug!("Running {:?}", cmd);
        let status = cmd
            .stdin(Stdio::null())
            .status()
            .map_err(|source| ToolError::Spawn {
                tool: tool.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                tool: tool.to_path_buf(),
                status,
            })
        }
    }
}

impl ExternalTools for CommandTools {
    fn link(&mut self, source: &Path, target: &Path) -> Result<(), ToolError> {
        Self::run(&self.linker, self.link_command(source, target))
    }

    fn archive(&mut self, source: &Path, tarball: &Path) -> Result<(), ToolError> {
        Self::run(&self.archiver, self.archive_command(source, tarball))
    }
}
