use std::io;

/// Errors that stop a validation run before or between suites
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing prerequisite: {item}\n  hint: {remediation}")]
    MissingPrerequisite { item: String, remediation: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn missing(item: impl Into<String>, remediation: impl Into<String>) -> Self {
        Error::MissingPrerequisite {
            item: item.into(),
            remediation: remediation.into(),
        }
    }

    /// Process exit code the harness terminates with for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;
