//! Workspace package hosting the end-to-end orchestration scenarios in `tests/`.

pub use validation_harness_core::*;
