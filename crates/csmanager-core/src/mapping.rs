//! Source to cloud target path mapping
//!
//! For every `$ROOT/some/dir` the mirror lives at `$ROOT/<target>/some/dir`.

use std::path::{Component, Path, PathBuf};

use crate::context::RuntimeContext;
use crate::error::{Error, Result};

/// Maps source directories under a root into the cloud target
#[derive(Debug, Clone, Copy)]
pub struct PathMapper<'a> {
    root: &'a Path,
    cloud_target: &'a Path,
}

impl<'a> PathMapper<'a> {
    /// Mapper for an explicit root and cloud target
    #[must_use]
    pub const fn new(root: &'a Path, cloud_target: &'a Path) -> Self {
        Self { root, cloud_target }
    }

    /// Mapper for the root and cloud target of a run
    #[must_use]
    pub fn for_context(ctx: &'a RuntimeContext) -> Self {
        Self::new(ctx.root(), ctx.cloud_target())
    }

    /// Path of `source` relative to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideRoot`] if `source` is not the root or below it,
    /// including paths that climb back out through `..`.
    pub fn relative<'p>(&self, source: &'p Path) -> Result<&'p Path> {
        let outside = || Error::OutsideRoot {
            path: source.to_path_buf(),
            root: self.root.to_path_buf(),
        };

        let relative = source.strip_prefix(self.root).map_err(|_| outside())?;
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(outside());
        }
        Ok(relative)
    }

    /// Target directory mirroring `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideRoot`] for sources not below the root and
    /// [`Error::InsideCloudTarget`] for sources that are (or are inside) the
    /// cloud target, which would otherwise be mirrored into themselves.
    pub fn map_to_target(&self, source: &Path) -> Result<PathBuf> {
        if source.starts_with(self.cloud_target) {
            return Err(Error::InsideCloudTarget {
                path: source.to_path_buf(),
                target: self.cloud_target.to_path_buf(),
            });
        }

        let relative = self.relative(source)?;
        if relative.as_os_str().is_empty() {
            // the root itself has no place inside its own cloud target
            return Err(Error::InsideCloudTarget {
                path: source.to_path_buf(),
                target: self.cloud_target.to_path_buf(),
            });
        }
        Ok(self.cloud_target.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> PathMapper<'static> {
        PathMapper::new(Path::new("/home/u"), Path::new("/home/u/Nextcloud"))
    }

    #[test]
    fn test_direct_child() {
        assert_eq!(
            mapper().map_to_target(Path::new("/home/u/Projects")).unwrap(),
            PathBuf::from("/home/u/Nextcloud/Projects")
        );
    }

    #[test]
    fn test_nested_path_keeps_suffix() {
        let source = Path::new("/home/u/Documents/taxes/2024");
        let target = mapper().map_to_target(source).unwrap();

        assert_eq!(target, PathBuf::from("/home/u/Nextcloud/Documents/taxes/2024"));
        assert_eq!(
            target,
            Path::new("/home/u/Nextcloud").join(source.strip_prefix("/home/u").unwrap())
        );
    }

    #[test]
    fn test_outside_root() {
        let err = mapper().map_to_target(Path::new("/abs/other")).unwrap_err();
        assert!(matches!(err, Error::OutsideRoot { .. }));
    }

    #[test]
    fn test_sibling_with_common_prefix_is_outside() {
        // `/home/user2` shares bytes with `/home/u` but is not below it
        let err = mapper().map_to_target(Path::new("/home/user2/x")).unwrap_err();
        assert!(matches!(err, Error::OutsideRoot { .. }));
    }

    #[test]
    fn test_cloud_target_rejected() {
        for source in ["/home/u/Nextcloud", "/home/u/Nextcloud/Projects", "/home/u"] {
            let err = mapper().map_to_target(Path::new(source)).unwrap_err();
            assert!(
                matches!(err, Error::InsideCloudTarget { .. }),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_parent_segments_are_outside() {
        for source in ["/home/u/../other/x", "/home/u/Projects/../../etc"] {
            let err = mapper().map_to_target(Path::new(source)).unwrap_err();
            assert!(
                matches!(err, Error::OutsideRoot { .. }),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_relative() {
        assert_eq!(
            mapper().relative(Path::new("/home/u/.config")).unwrap(),
            Path::new(".config")
        );
    }
}
