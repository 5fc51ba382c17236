use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The two independently runnable suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    Compiled,
    Notebooks,
}

impl SuiteKind {
    pub fn label(self) -> &'static str {
        match self {
            SuiteKind::Compiled => "C++ examples",
            SuiteKind::Notebooks => "Python notebooks",
        }
    }

    /// Whether this suite's status decides the harness exit code.
    pub fn is_gating(self) -> bool {
        matches!(self, SuiteKind::Compiled)
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one attempted suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteResult {
    pub suite: SuiteKind,
    pub exit_code: i32,
    pub elapsed_seconds: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SuiteResult {
    pub fn new(suite: SuiteKind, exit_code: i32, elapsed: Duration) -> Self {
        Self {
            suite,
            exit_code,
            elapsed_seconds: elapsed.as_secs(),
            elapsed,
        }
    }

    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Everything a completed run produced. Skipped suites stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HarnessReport {
    pub compiled: Option<SuiteResult>,
    pub notebooks: Option<SuiteResult>,
}

impl HarnessReport {
    pub fn record(&mut self, result: SuiteResult) {
        match result.suite {
            SuiteKind::Compiled => self.compiled = Some(result),
            SuiteKind::Notebooks => self.notebooks = Some(result),
        }
    }

    pub fn get(&self, suite: SuiteKind) -> Option<&SuiteResult> {
        match suite {
            SuiteKind::Compiled => self.compiled.as_ref(),
            SuiteKind::Notebooks => self.notebooks.as_ref(),
        }
    }

    /// Only gating suites count; notebook failures are reported, not fatal.
    pub fn is_failure(&self) -> bool {
        [&self.compiled, &self.notebooks]
            .into_iter()
            .flatten()
            .any(|result| result.suite.is_gating() && !result.passed())
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_failure() { 1 } else { 0 }
    }
}
