//! Discovers execution backends and feeds them to the notebook validator

use super::traits::ProcessExecutor;
use crate::{
    command::HarnessCommand,
    config::HarnessConfig,
    types::{SuiteKind, SuiteResult},
};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::compiled::TOOL_NOT_STARTED;

/// Why the backend list could not be discovered.
#[derive(Error, Debug)]
pub enum BackendQueryError {
    #[error("backend query could not start: {0}")]
    Launch(String),

    #[error("backend query exited with code {0}")]
    Status(i32),

    #[error("backend query printed no backends")]
    Empty,
}

pub struct NotebookRunner<'a, E: ProcessExecutor> {
    executor: E,
    config: &'a HarnessConfig,
}

impl<'a, E: ProcessExecutor> NotebookRunner<'a, E> {
    pub fn new(executor: E, config: &'a HarnessConfig) -> Self {
        Self { executor, config }
    }

    pub fn query_command(&self) -> HarnessCommand {
        HarnessCommand::new(self.config.python.as_str())
            .args(["-c".to_string(), self.config.backend_query.clone()])
    }

    /// Ask the runtime which targets it can dispatch to.
    pub fn query_backends(&self) -> Result<Vec<String>, BackendQueryError> {
        let outcome = self
            .executor
            .capture(&self.query_command())
            .map_err(|e| BackendQueryError::Launch(e.to_string()))?;

        if !outcome.success() {
            return Err(BackendQueryError::Status(outcome.exit_code));
        }

        let backends: Vec<String> = outcome
            .stdout
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if backends.is_empty() {
            Err(BackendQueryError::Empty)
        } else {
            Ok(backends)
        }
    }

    /// Discovered backends, or the configured default when discovery fails.
    pub fn resolve_backends(&self) -> Vec<String> {
        match self.query_backends() {
            Ok(backends) => {
                debug!("Discovered backends: {}", backends.join(" "));
                backends
            }
            Err(e) => {
                warn!("{e}; falling back to `{}`", self.config.default_backend);
                vec![self.config.default_backend.clone()]
            }
        }
    }

    pub fn command(&self, backends: &[String]) -> HarnessCommand {
        HarnessCommand::new(self.config.python.as_str())
            .arg(self.config.notebook_validator.display().to_string())
            .with_stdin(format!("{}\n", backends.join(" ")))
    }

    pub fn run(&self) -> SuiteResult {
        let started = Instant::now();
        let backends = self.resolve_backends();
        info!("Validating notebooks against: {}", backends.join(", "));

        let command = self.command(&backends);
        let exit_code = match self.executor.run(&command) {
            Ok(outcome) => outcome.exit_code,
            Err(e) => {
                error!("Failed to start notebook validation: {e}");
                TOOL_NOT_STARTED
            }
        };
        SuiteResult::new(SuiteKind::Notebooks, exit_code, started.elapsed())
    }
}
