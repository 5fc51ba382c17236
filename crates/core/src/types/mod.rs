pub mod run_mode;
pub mod selector;
pub mod suite;

// Re-export commonly used types
pub use run_mode::{RunMode, RunOptions};
pub use selector::TestSelector;
pub use suite::{HarnessReport, SuiteKind, SuiteResult};
