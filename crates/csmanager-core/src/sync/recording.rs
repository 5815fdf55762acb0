//! Recording [`ExternalTools`] fake for planner and engine tests

use std::path::{Path, PathBuf};

use crate::tools::{ExternalTools, ToolError};

/// One requested external action
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Link(PathBuf, PathBuf),
    Archive(PathBuf, PathBuf),
}

/// Records every call instead of spawning processes
#[derive(Debug, Default)]
pub(crate) struct RecordingTools {
    pub(crate) calls: Vec<Call>,
    /// Sources whose link request reports failure
    pub(crate) fail_links_from: Vec<PathBuf>,
    /// Sources whose archive request reports failure
    pub(crate) fail_archives_from: Vec<PathBuf>,
}

impl RecordingTools {
    fn failure(tool: &str) -> ToolError {
        ToolError::Spawn {
            tool: PathBuf::from(tool),
            source: std::io::Error::other("simulated failure"),
        }
    }
}

impl ExternalTools for RecordingTools {
    fn link(&mut self, source: &Path, target: &Path) -> Result<(), ToolError> {
        self.calls
            .push(Call::Link(source.to_path_buf(), target.to_path_buf()));
        if self.fail_links_from.iter().any(|p| p == source) {
            return Err(Self::failure("synclink"));
        }
        Ok(())
    }

    fn archive(&mut self, source: &Path, tarball: &Path) -> Result<(), ToolError> {
        self.calls
            .push(Call::Archive(source.to_path_buf(), tarball.to_path_buf()));
        if self.fail_archives_from.iter().any(|p| p == source) {
            return Err(Self::failure("tar"));
        }
        Ok(())
    }
}
