//! Runs the allow-listed compiled examples through the test tool

use super::traits::ProcessExecutor;
use crate::{
    command::HarnessCommand,
    config::HarnessConfig,
    types::{SuiteKind, SuiteResult, TestSelector},
};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Exit code recorded when the test tool itself cannot be started.
pub const TOOL_NOT_STARTED: i32 = 127;

/// Upper bound for any single test; the tool fails the test, not the run.
pub const PER_TEST_TIMEOUT_SECS: u64 = 300;

pub struct CompiledTestRunner<'a, E: ProcessExecutor> {
    executor: E,
    build_dir: &'a Path,
    test_tool: &'a str,
    selector: &'a TestSelector,
}

impl<'a, E: ProcessExecutor> CompiledTestRunner<'a, E> {
    pub fn new(executor: E, config: &'a HarnessConfig, selector: &'a TestSelector) -> Self {
        Self {
            executor,
            build_dir: &config.build_dir,
            test_tool: &config.test_tool,
            selector,
        }
    }

    pub fn command(&self) -> HarnessCommand {
        HarnessCommand::new(self.test_tool)
            .arg("--test-dir")
            .arg(self.build_dir.display().to_string())
            .arg("-R")
            .arg(self.selector.to_filter())
            .args(["--output-on-failure", "--verbose", "--timeout"])
            .arg(PER_TEST_TIMEOUT_SECS.to_string())
    }

    /// Never fails: a tool error is this suite's failure, not the harness's.
    pub fn run(&self) -> SuiteResult {
        let command = self.command();
        info!(
            "Running {} compiled tests from {}",
            self.selector.len(),
            self.build_dir.display()
        );
        debug!("{}", command.to_shell_command());

        let started = Instant::now();
        let exit_code = match self.executor.run(&command) {
            Ok(outcome) => outcome.exit_code,
            Err(e) => {
                error!("Failed to start {}: {e}", self.test_tool);
                TOOL_NOT_STARTED
            }
        };
        SuiteResult::new(SuiteKind::Compiled, exit_code, started.elapsed())
    }
}
