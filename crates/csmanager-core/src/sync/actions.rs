//! Sync actions and tarball naming

use std::path::{Path, PathBuf};

use crate::scanner::HIDDEN_PREFIX;

/// Extension of dot-dir archives
pub const ARCHIVE_EXTENSION: &str = "tgz";

/// Sync action to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Ensure `target` exists, then hard-link `source` into it
    Link {
        /// Directory under the root
        source: PathBuf,
        /// Mirror inside the cloud target
        target: PathBuf,
    },
    /// Ensure the staging dir exists, then archive `source` into `tarball`
    Archive {
        /// Hidden directory under the root
        source: PathBuf,
        /// Archive inside the dotfiles staging dir
        tarball: PathBuf,
    },
    /// Nothing to do for this directory
    Skip {
        /// Directory left alone
        path: PathBuf,
        /// Why nothing is done
        reason: String,
    },
}

impl SyncAction {
    /// Source directory the action is about
    #[must_use]
    pub fn source(&self) -> &Path {
        match self {
            Self::Link { source, .. } | Self::Archive { source, .. } => source,
            Self::Skip { path, .. } => path,
        }
    }
}

/// Tarball file name for a hidden directory given relative to the root.
///
/// The leading `.` is dropped and separators are kept, so `.config` becomes
/// `config.tgz` and `.local/share` becomes `local/share.tgz`.
#[must_use]
pub fn tarball_name(relative: &Path) -> PathBuf {
    let relative = relative.to_string_lossy();
    let stripped = relative
        .strip_prefix(char::from(HIDDEN_PREFIX))
        .unwrap_or(&relative);
    PathBuf::from(format!("{stripped}.{ARCHIVE_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tarball_name_strips_prefix() {
        assert_eq!(tarball_name(Path::new(".config")), PathBuf::from("config.tgz"));
        assert_eq!(tarball_name(Path::new(".ssh")), PathBuf::from("ssh.tgz"));
    }

    #[test]
    fn test_tarball_name_keeps_separators() {
        assert_eq!(
            tarball_name(Path::new(".local/share")),
            PathBuf::from("local/share.tgz")
        );
    }

    #[test]
    fn test_tarball_name_strips_only_one_dot() {
        assert_eq!(tarball_name(Path::new("..odd")), PathBuf::from(".odd.tgz"));
        assert_eq!(tarball_name(Path::new("plain")), PathBuf::from("plain.tgz"));
    }

    #[test]
    fn test_action_source() {
        let action = SyncAction::Archive {
            source: PathBuf::from("/home/u/.config"),
            tarball: PathBuf::from("/home/u/Nextcloud/Dotty/config.tgz"),
        };
        assert_eq!(action.source(), Path::new("/home/u/.config"));
    }
}
