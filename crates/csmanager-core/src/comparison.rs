//! Modification time comparison against the watermark

mod staleness;
mod timestamp;

pub use staleness::StalenessDetector;
pub use timestamp::TimestampComparator;
