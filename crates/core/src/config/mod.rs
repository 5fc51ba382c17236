//! Configuration management for the validation harness

mod harness_config;

pub use harness_config::{CONFIG_FILE_NAME, HarnessConfig};
