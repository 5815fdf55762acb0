use std::io;
use std::path::PathBuf;

/// All fatal errors a sync run can stop on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mutually exclusive options were requested together.
    #[error("conflicting options: {0}")]
    Conflict(String),

    /// The user's home directory could not be determined.
    #[error("cannot determine absolute path to user's home directory")]
    NoHome,

    /// A required directory does not exist.
    #[error("no such dir: {}", path.display())]
    MissingDirectory {
        /// Offending path
        path: PathBuf,
    },

    /// A path exists but is not a directory.
    #[error("{} is not a dir", path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
    },

    /// A required file does not exist.
    #[error("no such file: {}", path.display())]
    MissingFile {
        /// Offending path
        path: PathBuf,
    },

    /// A source path is not a descendant of the run's root.
    #[error("{} is not under root {}", path.display(), root.display())]
    OutsideRoot {
        /// Offending path
        path: PathBuf,
        /// Root of the run
        root: PathBuf,
    },

    /// A source path lies inside the cloud target and would be mirrored into itself.
    #[error("{} is inside the cloud target {}", path.display(), target.display())]
    InsideCloudTarget {
        /// Offending path
        path: PathBuf,
        /// Cloud target of the run
        target: PathBuf,
    },

    /// The cloud target name is not a single path segment.
    #[error("invalid cloud target {name:?}: must be a single directory name")]
    InvalidCloudTarget {
        /// Name as given
        name: String,
    },

    /// The dotfiles staging directory does not stay inside the cloud target.
    #[error("invalid dot files dir {}: must be a relative path inside the cloud target", path.display())]
    InvalidDotFilesDir {
        /// Path as given
        path: PathBuf,
    },

    /// Underlying I/O failure.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// System error
        #[source]
        source: io::Error,
    },

    /// Failure while walking a directory tree.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Tree being walked
        path: PathBuf,
        /// Walk error
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Wrap an I/O error with a description of what failed.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
