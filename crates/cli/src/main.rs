use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use validation_harness::Cli;
use validation_harness::commands::validate_command;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let report = validate_command(cli.run_options(), cli.config.as_deref())?;
    Ok(ExitCode::from(report.exit_code()))
}

/// `-h`/`-V` succeed; anything clap rejects is a configuration error.
fn parse_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<validation_harness_core::Error>()
        .map(validation_harness_core::Error::exit_code)
        .unwrap_or(1)
}

// Initialize tracing from RUST_LOG; -v lowers the default level to debug
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
