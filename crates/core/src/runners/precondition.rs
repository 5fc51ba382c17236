//! Checks that external artifacts and tools exist before a suite runs

use super::traits::ProcessExecutor;
use crate::{
    command::HarnessCommand,
    config::HarnessConfig,
    error::{Error, Result},
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Something a suite needs before it can start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prerequisite {
    /// A file or directory that must already exist
    Path { path: PathBuf, remediation: String },
    /// An executable resolvable on `PATH`
    Executable { program: String, remediation: String },
    /// A module the interpreter must be able to import
    Module {
        interpreter: String,
        module: String,
        remediation: String,
    },
    /// A tool that must answer its probe successfully, installable once
    Tool {
        program: String,
        probe_args: Vec<String>,
        install: Option<HarnessCommand>,
        remediation: String,
    },
}

impl Prerequisite {
    pub fn describe(&self) -> String {
        match self {
            Prerequisite::Path { path, .. } => path.display().to_string(),
            Prerequisite::Executable { program, .. } => format!("executable `{program}`"),
            Prerequisite::Module {
                interpreter,
                module,
                ..
            } => format!("module `{module}` for {interpreter}"),
            Prerequisite::Tool { program, .. } => format!("tool `{program}`"),
        }
    }

    pub fn remediation(&self) -> &str {
        match self {
            Prerequisite::Path { remediation, .. }
            | Prerequisite::Executable { remediation, .. }
            | Prerequisite::Module { remediation, .. }
            | Prerequisite::Tool { remediation, .. } => remediation,
        }
    }

    fn missing(&self) -> Error {
        Error::missing(self.describe(), self.remediation())
    }
}

/// The configured build tree the compiled suite runs against.
pub fn compiled_prerequisites(config: &HarnessConfig) -> Vec<Prerequisite> {
    vec![Prerequisite::Path {
        path: config.build_marker_path(),
        remediation: format!(
            "configure and build the examples first, e.g. `cmake -S . -B {dir} -G Ninja && ninja -C {dir}`",
            dir = config.build_dir.display()
        ),
    }]
}

/// Interpreter, runtime module, notebook tool and validation script, in the
/// order they are checked.
pub fn notebook_prerequisites(config: &HarnessConfig) -> Vec<Prerequisite> {
    vec![
        Prerequisite::Executable {
            program: config.python.clone(),
            remediation: format!("install {} and make sure it is on PATH", config.python),
        },
        Prerequisite::Module {
            interpreter: config.python.clone(),
            module: config.runtime_module.clone(),
            remediation: format!(
                "install the `{}` Python package into {}",
                config.runtime_module, config.python
            ),
        },
        Prerequisite::Tool {
            program: config.notebook_tool.clone(),
            probe_args: config.notebook_tool_probe_args.clone(),
            install: Some(config.notebook_install_command()),
            remediation: format!(
                "install {} (e.g. `{} -m pip install notebook nbconvert`)",
                config.notebook_tool, config.python
            ),
        },
        Prerequisite::Path {
            path: config.notebook_validator.clone(),
            remediation: "run the harness from the repository root or set `notebook_validator`"
                .to_string(),
        },
    ]
}

pub struct PreconditionChecker<E: ProcessExecutor> {
    executor: E,
}

impl<E: ProcessExecutor> PreconditionChecker<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn is_satisfied(&self, prerequisite: &Prerequisite) -> bool {
        match prerequisite {
            Prerequisite::Path { path, .. } => path.exists(),
            Prerequisite::Executable { program, .. } => self.executor.locate(program).is_some(),
            Prerequisite::Module {
                interpreter,
                module,
                ..
            } => {
                let probe = HarnessCommand::new(interpreter.as_str())
                    .args(["-c".to_string(), format!("import {module}")]);
                self.succeeds(&probe)
            }
            Prerequisite::Tool {
                program,
                probe_args,
                ..
            } => {
                let probe = HarnessCommand::new(program.as_str()).args(probe_args.iter().cloned());
                self.executor.locate(program).is_some() && self.succeeds(&probe)
            }
        }
    }

    /// Satisfied, or recovered by a single install attempt.
    pub fn check(&self, prerequisite: &Prerequisite) -> Result<()> {
        if self.is_satisfied(prerequisite) {
            debug!("Found {}", prerequisite.describe());
            return Ok(());
        }

        let Prerequisite::Tool {
            install: Some(install),
            ..
        } = prerequisite
        else {
            return Err(prerequisite.missing());
        };

        println!(
            "{} not found, installing: {}",
            prerequisite.describe(),
            install.to_shell_command()
        );
        match self.executor.run(install) {
            Ok(outcome) if outcome.success() => {}
            Ok(outcome) => warn!("Install exited with code {}", outcome.exit_code),
            Err(e) => warn!("Install could not be started: {e}"),
        }

        if self.is_satisfied(prerequisite) {
            info!("Installed {}", prerequisite.describe());
            Ok(())
        } else {
            Err(prerequisite.missing())
        }
    }

    /// Stops at the first unrecoverable prerequisite.
    pub fn check_all(&self, prerequisites: &[Prerequisite]) -> Result<()> {
        prerequisites.iter().try_for_each(|p| self.check(p))
    }

    fn succeeds(&self, command: &HarnessCommand) -> bool {
        match self.executor.capture(command) {
            Ok(outcome) => outcome.success(),
            Err(e) => {
                debug!("`{}` could not run: {e}", command.to_shell_command());
                false
            }
        }
    }
}
