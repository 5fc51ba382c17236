use super::traits::{ProcessExecutor, ProcessOutcome};
use crate::{command::HarnessCommand, error::Result};
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Instant;
use tracing::debug;

/// Spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessExecutor for SystemExecutor {
    fn run(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        debug!("Running: {}", command.to_shell_command());
        let started = Instant::now();
        let status = command.execute()?;
        Ok(ProcessOutcome {
            exit_code: exit_code_of(status),
            duration: started.elapsed(),
            stdout: None,
        })
    }

    fn capture(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        debug!("Capturing: {}", command.to_shell_command());
        let started = Instant::now();
        let (status, stdout) = command.execute_captured()?;
        Ok(ProcessOutcome {
            exit_code: exit_code_of(status),
            duration: started.elapsed(),
            stdout: Some(stdout),
        })
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Signal-terminated children have no code; report them as a plain failure.
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
