//! Immediate child directories of a root

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{DirKind, DirectoryEntry};
use crate::config::ExclusionSet;
use crate::error::{Error, Result};

/// Lists the directories directly under a root, minus exclusions
pub struct DirectoryEnumerator<'a> {
    exclusions: &'a ExclusionSet,
}

impl<'a> DirectoryEnumerator<'a> {
    /// Create an enumerator filtering through `exclusions`
    #[must_use]
    pub const fn new(exclusions: &'a ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// List the child directories of `root` whose kind is `kind`.
    ///
    /// Symlinks and other non-directories are skipped. Each candidate path is
    /// built as `root/name` and dropped when it is in the exclusion set.
    /// Entries come back sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    pub fn list(&self, root: &Path, kind: DirKind) -> Result<Vec<DirectoryEntry>> {
        let read_err = |e| Error::io(format!("Failed to read directory {}", root.display()), e);

        let mut entries = Vec::new();
        for dirent in fs::read_dir(root).map_err(read_err)? {
            let dirent = dirent.map_err(read_err)?;
            let file_type = dirent.file_type().map_err(read_err)?;
            if !file_type.is_dir() {
                continue;
            }

            let name = dirent.file_name();
            if DirKind::of_name(&name) != kind {
                continue;
            }

            let path = root.join(&name);
            if self.exclusions.contains(&path) {
                debug!("Excluded: {}", path.display());
                continue;
            }

            entries.push(DirectoryEntry { path, kind });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup_root() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in ["Projects", "Music", "Dropbox", ".config", ".cache", ".ssh"] {
            fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        fs::write(tmp.path().join("notes.txt"), "file").unwrap();
        fs::write(tmp.path().join(".bashrc"), "file").unwrap();
        tmp
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_normal_dirs() {
        let tmp = setup_root();
        let exclusions = ExclusionSet::default();
        let entries = DirectoryEnumerator::new(&exclusions)
            .list(tmp.path(), DirKind::Normal)
            .unwrap();

        assert_eq!(names(&entries), vec!["Dropbox", "Music", "Projects"]);
        assert!(entries.iter().all(|e| e.kind == DirKind::Normal));
        assert!(entries.iter().all(|e| e.path.parent() == Some(tmp.path())));
    }

    #[test]
    fn test_hidden_dirs() {
        let tmp = setup_root();
        let exclusions = ExclusionSet::default();
        let entries = DirectoryEnumerator::new(&exclusions)
            .list(tmp.path(), DirKind::Hidden)
            .unwrap();

        assert_eq!(names(&entries), vec![".cache", ".config", ".ssh"]);
    }

    #[test]
    fn test_exclusions_apply_to_both_kinds() {
        let tmp = setup_root();
        let exclusions = ExclusionSet::new([
            tmp.path().join("Dropbox"),
            tmp.path().join(".cache"),
            PathBuf::from("/elsewhere/Music"),
        ]);
        let enumerator = DirectoryEnumerator::new(&exclusions);

        let normal = enumerator.list(tmp.path(), DirKind::Normal).unwrap();
        let hidden = enumerator.list(tmp.path(), DirKind::Hidden).unwrap();

        assert_eq!(names(&normal), vec!["Music", "Projects"]);
        assert_eq!(names(&hidden), vec![".config", ".ssh"]);
        for entry in normal.iter().chain(&hidden) {
            assert!(!exclusions.contains(&entry.path));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_skipped() {
        let tmp = setup_root();
        std::os::unix::fs::symlink(tmp.path().join("Music"), tmp.path().join("Tunes")).unwrap();

        let exclusions = ExclusionSet::default();
        let entries = DirectoryEnumerator::new(&exclusions)
            .list(tmp.path(), DirKind::Normal)
            .unwrap();

        assert!(!names(&entries).contains(&"Tunes".to_string()));
    }

    #[test]
    fn test_missing_root() {
        let tmp = TempDir::new().unwrap();
        let exclusions = ExclusionSet::default();
        let result =
            DirectoryEnumerator::new(&exclusions).list(&tmp.path().join("gone"), DirKind::Normal);

        assert!(result.is_err());
    }
}
