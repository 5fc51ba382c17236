//! Core traits for the runner architecture

use crate::{command::HarnessCommand, error::Result};
use std::path::PathBuf;
use std::time::Duration;

/// Structured result of one subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    pub duration: Duration,
    /// Present only when the output was captured rather than streamed
    pub stdout: Option<String>,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Seam between the orchestration logic and the operating system.
///
/// Production code uses [`super::SystemExecutor`]; tests script the
/// responses instead of spawning real tools.
pub trait ProcessExecutor {
    /// Run with output streamed to the terminal. Errors only when the
    /// process could not be started at all.
    fn run(&self, command: &HarnessCommand) -> Result<ProcessOutcome>;

    /// Run with stdout captured into [`ProcessOutcome::stdout`].
    fn capture(&self, command: &HarnessCommand) -> Result<ProcessOutcome>;

    /// Resolve an executable on `PATH`.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

impl<E: ProcessExecutor + ?Sized> ProcessExecutor for &E {
    fn run(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        (**self).run(command)
    }

    fn capture(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        (**self).capture(command)
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }
}
