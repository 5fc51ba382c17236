//! Informational snapshot of the machine the harness runs on

use crate::{config::HarnessConfig, runners::ProcessExecutor};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub os: &'static str,
    pub arch: &'static str,
    pub test_tool: Option<PathBuf>,
    pub python: Option<PathBuf>,
}

impl EnvironmentReport {
    pub fn collect<E: ProcessExecutor>(config: &HarnessConfig, executor: &E) -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            test_tool: executor.locate(&config.test_tool),
            python: executor.locate(&config.python),
        }
    }

    pub fn log(&self) {
        info!("Platform: {}/{}", self.os, self.arch);
        info!("Test tool: {}", display_location(&self.test_tool));
        info!("Interpreter: {}", display_location(&self.python));
    }
}

fn display_location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::scripted::ScriptedExecutor;

    #[test]
    fn test_collect_resolves_configured_tools() {
        let exec = ScriptedExecutor::new().on_path(["ctest"]);
        let report = EnvironmentReport::collect(&HarnessConfig::default(), &exec);
        assert_eq!(report.test_tool, Some(PathBuf::from("/usr/bin/ctest")));
        assert_eq!(report.python, None);
        assert_eq!(report.os, std::env::consts::OS);
        assert_eq!(display_location(&report.python), "not found");
    }
}
