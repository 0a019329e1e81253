//! Error types for the VIVO client

use thiserror::Error;

/// Message returned by every test-only operation while the test gate is closed.
pub const TEST_MODE_DISABLED_MESSAGE: &str = "The application is not in test mode.";

#[derive(Error, Debug)]
pub enum VivoError {
    /// Network or HTTP-level failure reported by the transport (500).
    #[error("{0}")]
    Transport(String),

    /// Test-only operation requested while `debug && test_mode` is false (403).
    #[error("The application is not in test mode.")]
    TestModeDisabled,

    /// Unknown test operation type (400).
    #[error("Invalid type operation: {0}")]
    InvalidOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl VivoError {
    /// HTTP status the error is reported with when it reaches a caller.
    pub fn status_code(&self) -> u16 {
        match self {
            VivoError::TestModeDisabled => 403,
            VivoError::InvalidOperation(_) => 400,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for VivoError {
    fn from(err: reqwest::Error) -> Self {
        VivoError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VivoError>;
