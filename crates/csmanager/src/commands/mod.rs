pub mod common;
pub mod run;

pub use common::SyncOptions;
pub use run::Run;
