use serde::Serialize;

/// Which suites a validation run attempts.
///
/// Built once from the command line flags and passed down explicitly. A flag
/// only ever narrows the run; it can never switch both suites off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    All,
    CompiledOnly,
    NotebooksOnly,
}

impl RunMode {
    /// Resolve the mode from the `-c` and `-p` flags.
    ///
    /// Asking for both suites explicitly is the same as asking for neither.
    pub fn from_flags(compiled_only: bool, notebooks_only: bool) -> Self {
        match (compiled_only, notebooks_only) {
            (true, false) => RunMode::CompiledOnly,
            (false, true) => RunMode::NotebooksOnly,
            _ => RunMode::All,
        }
    }

    pub fn runs_compiled(self) -> bool {
        !matches!(self, RunMode::NotebooksOnly)
    }

    pub fn runs_notebooks(self) -> bool {
        !matches!(self, RunMode::CompiledOnly)
    }
}

/// Immutable options for one invocation of the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub mode: RunMode,
    /// Advisory: raises log detail, never changes control flow
    pub verbose: bool,
}

impl RunOptions {
    pub fn new(mode: RunMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }
}
