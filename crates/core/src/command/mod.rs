pub mod harness_command;

pub use harness_command::HarnessCommand;
