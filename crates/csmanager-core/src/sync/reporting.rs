//! Sync run reporting and statistics

use std::fmt::Write;

use super::SyncResult;

/// Line framing each sweep in the log and the summary on stdout
pub const SWEEP_SEPARATOR: &str = "====================";

/// Sync run reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &SyncResult) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{SWEEP_SEPARATOR}");
        output.push_str("Sync Summary\n");
        let _ = writeln!(output, "Linked:       {}", result.linked);
        let _ = writeln!(output, "Archived:     {}", result.archived);
        let _ = writeln!(output, "Unchanged:    {}", result.unchanged);
        let _ = writeln!(output, "Dirs created: {}", result.dirs_created);

        if !result.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", result.errors.len());
            for error in &result.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        let _ = writeln!(output, "\nTotal operations: {}", result.total_operations());

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }
        let _ = writeln!(output, "{SWEEP_SEPARATOR}");

        output
    }
}
