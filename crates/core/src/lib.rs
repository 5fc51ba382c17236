//! validation-harness - runs the CPU-compatible examples and notebooks
//!
//! This crate provides functionality to:
//! - Check that the build tree, interpreter and notebook tooling are present
//! - Run the allow-listed compiled examples through the test tool
//! - Validate notebooks against the discovered execution backends
//! - Fold both suites into a single exit status
pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod orchestrator;
pub mod runners;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::HarnessCommand;
pub use config::HarnessConfig;
pub use orchestrator::Orchestrator;
pub use runners::{ProcessExecutor, SystemExecutor};
