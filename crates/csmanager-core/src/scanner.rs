//! Source directory discovery
//!
//! Two ways to obtain the directories of a run:
//! - `enumerator`: immediate children of the root, split into hidden and
//!   normal directories and filtered through the exclusion set
//! - `list_file`: an explicit newline-delimited list, taken as given

mod enumerator;
mod list_file;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use enumerator::DirectoryEnumerator;
pub use list_file::ListFileReader;

/// First byte of a hidden directory name
pub const HIDDEN_PREFIX: u8 = b'.';

/// Whether a directory is hidden (dot-prefixed) or normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Name does not start with `.`
    Normal,
    /// Name starts with `.`
    Hidden,
}

impl DirKind {
    /// Classify a directory by its basename
    #[must_use]
    pub fn of_name(name: &OsStr) -> Self {
        if name.as_encoded_bytes().first() == Some(&HIDDEN_PREFIX) {
            Self::Hidden
        } else {
            Self::Normal
        }
    }

    /// Classify a directory by the last component of its path
    #[must_use]
    pub fn of_path(path: &Path) -> Self {
        path.file_name().map_or(Self::Normal, Self::of_name)
    }
}

/// An absolute path known to be a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Absolute path
    pub path: PathBuf,
    /// Hidden or normal
    pub kind: DirKind,
}

impl DirectoryEntry {
    /// Tag `path` by its basename
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let kind = DirKind::of_path(&path);
        Self { path, kind }
    }

    /// Whether the basename starts with `.`
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.kind == DirKind::Hidden
    }
}
