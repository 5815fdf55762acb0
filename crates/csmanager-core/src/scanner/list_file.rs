//! Explicit directory lists read from a file

use std::fs;
use std::path::{Path, PathBuf};

use super::DirectoryEntry;
use crate::error::{Error, Result};

/// Reads newline-delimited directory lists.
///
/// Lines starting with `/` are absolute; everything else is relative to the
/// root. Entries are canonicalized, so `..` segments and symlinks are
/// resolved before anything is mapped. No exclusion filtering happens here.
pub struct ListFileReader<'a> {
    root: &'a Path,
}

impl<'a> ListFileReader<'a> {
    /// Reader resolving relative lines against `root`
    #[must_use]
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Read and validate every entry of `list_file`, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] if the list itself is absent, and
    /// [`Error::MissingDirectory`] / [`Error::NotADirectory`] for the first
    /// entry that does not resolve to an existing directory.
    pub fn read(&self, list_file: &Path) -> Result<Vec<DirectoryEntry>> {
        if !list_file.is_file() {
            return Err(Error::MissingFile {
                path: list_file.to_path_buf(),
            });
        }

        let content = fs::read_to_string(list_file)
            .map_err(|e| Error::io(format!("Failed to read {}", list_file.display()), e))?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let path = self.resolve(line);
                if !path.exists() {
                    return Err(Error::MissingDirectory { path });
                }
                if !path.is_dir() {
                    return Err(Error::NotADirectory { path });
                }
                let path = dunce::canonicalize(&path)
                    .map_err(|e| Error::io(format!("Failed to resolve {}", path.display()), e))?;
                Ok(DirectoryEntry::new(path))
            })
            .collect()
    }

    /// Turn one list line into an absolute path
    #[must_use]
    pub fn resolve(&self, line: &str) -> PathBuf {
        if line.starts_with('/') {
            PathBuf::from(line)
        } else {
            self.root.join(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_lines() {
        let reader = ListFileReader::new(Path::new("/home/u"));

        assert_eq!(reader.resolve("Projects"), PathBuf::from("/home/u/Projects"));
        assert_eq!(reader.resolve("a/b"), PathBuf::from("/home/u/a/b"));
        assert_eq!(reader.resolve("/abs/other"), PathBuf::from("/abs/other"));
    }

    #[test]
    fn test_read_mixed_entries() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Projects")).unwrap();

        let list = root.path().join("dirs.lst");
        fs::write(
            &list,
            format!("Projects\n{}\n", other.path().display()),
        )
        .unwrap();

        let entries = ListFileReader::new(root.path()).read(&list).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();

        assert_eq!(
            paths,
            vec![
                dunce::canonicalize(root.path().join("Projects")).unwrap(),
                dunce::canonicalize(other.path()).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parent_segments_resolved() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("u");
        fs::create_dir_all(root.join("Projects")).unwrap();
        fs::create_dir_all(tmp.path().join("other/x")).unwrap();
        let list = root.join("dirs.lst");
        fs::write(&list, "Projects/../Projects\n../other/x\n").unwrap();

        let entries = ListFileReader::new(&root).read(&list).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();

        assert_eq!(
            paths,
            vec![
                dunce::canonicalize(root.join("Projects")).unwrap(),
                dunce::canonicalize(tmp.path().join("other/x")).unwrap(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_entry_resolved_to_target() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("u");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(tmp.path().join("elsewhere")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("elsewhere"), root.join("link")).unwrap();
        let list = root.join("dirs.lst");
        fs::write(&list, "link\n").unwrap();

        let entries = ListFileReader::new(&root).read(&list).unwrap();
        assert_eq!(
            entries[0].path,
            dunce::canonicalize(tmp.path().join("elsewhere")).unwrap()
        );
    }

    #[test]
    fn test_hidden_entries_not_filtered() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join(".config")).unwrap();
        let list = root.path().join("dirs.lst");
        fs::write(&list, ".config\n").unwrap();

        let entries = ListFileReader::new(root.path()).read(&list).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_hidden());
    }

    #[test]
    fn test_missing_entry_fails() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Projects")).unwrap();
        let list = root.path().join("dirs.lst");
        fs::write(&list, "Projects\n/abs/other/does/not/exist\n").unwrap();

        let err = ListFileReader::new(root.path()).read(&list).unwrap_err();
        match err {
            Error::MissingDirectory { path } => {
                assert_eq!(path, PathBuf::from("/abs/other/does/not/exist"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_entry_fails() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("plain"), "x").unwrap();
        let list = root.path().join("dirs.lst");
        fs::write(&list, "plain\n").unwrap();

        let result = ListFileReader::new(root.path()).read(&list);
        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }

    #[test]
    fn test_missing_list_file() {
        let root = TempDir::new().unwrap();
        let result = ListFileReader::new(root.path()).read(&root.path().join("nope.lst"));

        assert!(matches!(result, Err(Error::MissingFile { .. })));
    }
}
