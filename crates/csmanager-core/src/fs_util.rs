//! Small filesystem helpers shared by the config store and the executor

use std::fs::DirBuilder;
use std::path::Path;

use crate::error::{Error, Result};

/// Permission bits for every directory csmanager creates
const DIR_MODE: u32 = 0o775;

/// Create `path` (and missing parents) with mode 0775 unless it already is a directory.
///
/// Returns whether anything was created.
pub(crate) fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    #[cfg(not(unix))]
    let _ = DIR_MODE;

    builder
        .create(path)
        .map_err(|e| Error::io(format!("Failed to create directory: {}", path.display()), e))?;
    Ok(true)
}
