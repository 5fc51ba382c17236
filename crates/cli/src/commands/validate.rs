use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use validation_harness_core::{
    HarnessConfig, HarnessReport, Orchestrator, RunOptions, SystemExecutor,
};

use crate::display::print_summary;

/// Load the configuration, run the selected suites and print the summary.
pub fn validate_command(options: RunOptions, config_path: Option<&Path>) -> Result<HarnessReport> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let config = HarnessConfig::resolve(config_path, &cwd)?;
    debug!("Resolved configuration: {:?}", config);

    let executor = SystemExecutor::new();
    let orchestrator = Orchestrator::new(&config, &executor);
    let report = orchestrator.run(options.mode)?;

    print_summary(&report, options.mode);
    Ok(report)
}
