//! # csmanager-core
//!
//! Planning library for the csmanager cloud staging tool.
//!
//! This library decides which directories under a root get mirrored into a
//! cloud sync folder (by an external hard-linking tool) and which hidden
//! directories changed enough since the last run to be archived again.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for the csmanager library
pub mod error;

/// Immutable per-run context (root, cloud target, config locations)
pub mod context;

/// Persisted configuration files: exclusion list and cloud target name
pub mod config;

/// Source directory enumeration and list-file reading
pub mod scanner;

/// Source to cloud target path mapping
pub mod mapping;

/// Modification time comparison and staleness detection
pub mod comparison;

/// Persisted dot-dir sweep timestamp
pub mod watermark;

/// External link and archive tools
pub mod tools;

/// Sync planning and execution
pub mod sync;

mod fs_util;

pub use context::{ContextOptions, RuntimeContext};
pub use error::{Error, Result};
