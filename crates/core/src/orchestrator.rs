//! Sequences the suites according to the run mode

use crate::{
    config::HarnessConfig,
    environment::EnvironmentReport,
    error::Result,
    runners::{
        CompiledTestRunner, NotebookRunner, PreconditionChecker, ProcessExecutor,
        precondition::{compiled_prerequisites, notebook_prerequisites},
    },
    types::{HarnessReport, RunMode, SuiteResult, TestSelector},
};
use tracing::info;

/// Runs the compiled suite, then the notebook suite, strictly in sequence.
///
/// Missing prerequisites abort the whole run with an error; a failing suite
/// is only recorded in the returned [`HarnessReport`].
pub struct Orchestrator<'a, E: ProcessExecutor> {
    config: &'a HarnessConfig,
    executor: &'a E,
    selector: TestSelector,
}

impl<'a, E: ProcessExecutor> Orchestrator<'a, E> {
    pub fn new(config: &'a HarnessConfig, executor: &'a E) -> Self {
        Self {
            config,
            executor,
            selector: TestSelector::cpu_compatible(),
        }
    }

    pub fn run(&self, mode: RunMode) -> Result<HarnessReport> {
        info!("Validation mode: {mode:?}");
        EnvironmentReport::collect(self.config, self.executor).log();

        let checker = PreconditionChecker::new(self.executor);
        let mut report = HarnessReport::default();

        if mode.runs_compiled() {
            checker.check_all(&compiled_prerequisites(self.config))?;
            println!("==> Running C++ examples");
            let result = CompiledTestRunner::new(self.executor, self.config, &self.selector).run();
            announce(&result);
            report.record(result);
        }

        if mode.runs_notebooks() {
            checker.check_all(&notebook_prerequisites(self.config))?;
            println!("==> Running Python notebooks");
            let result = NotebookRunner::new(self.executor, self.config).run();
            announce(&result);
            report.record(result);
        }

        Ok(report)
    }
}

fn announce(result: &SuiteResult) {
    let verdict = if result.passed() { "passed" } else { "failed" };
    println!(
        "{} {verdict} (exit code {}) in {}s",
        result.suite, result.exit_code, result.elapsed_seconds
    );
}
