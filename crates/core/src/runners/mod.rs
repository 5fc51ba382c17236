//! Suite runners and the process seam they share

pub mod compiled;
pub mod notebook;
pub mod precondition;
#[cfg(any(test, feature = "test-support"))]
pub mod scripted;
pub mod system;
pub mod traits;

pub use compiled::CompiledTestRunner;
pub use notebook::{BackendQueryError, NotebookRunner};
pub use precondition::{PreconditionChecker, Prerequisite};
pub use system::SystemExecutor;
pub use traits::{ProcessExecutor, ProcessOutcome};
