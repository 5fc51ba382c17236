use clap::Parser;
use std::path::PathBuf;

use validation_harness_core::{RunMode, RunOptions};

/// Validate the CPU-compatible C++ examples and Python notebooks
#[derive(Parser, Debug)]
#[command(name = "validate-examples")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Run only the compiled C++ examples
    #[arg(short = 'c', long = "compiled-only")]
    pub compiled_only: bool,

    /// Run only the Python notebooks
    #[arg(short = 'p', long = "notebooks-only")]
    pub notebooks_only: bool,

    /// Show more detail while running
    #[arg(short, long)]
    pub verbose: bool,

    /// Harness configuration file (defaults to the nearest .validation-harness.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new(
            RunMode::from_flags(self.compiled_only, self.notebooks_only),
            self.verbose,
        )
    }
}
