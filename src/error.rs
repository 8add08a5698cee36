//! Error types for the navigator

use thiserror::Error;

/// Result type alias for navigator operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Navigator error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Page identifier is empty after trimming
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid command arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Line does not start with a known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// IO error
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 64,   // EX_USAGE
            CliError::UnknownCommand(_) => 64,     // EX_USAGE
            CliError::InvalidInput(_) => 65,       // EX_DATAERR
            CliError::IoError(_) => 74,            // EX_IOERR
            CliError::SerializationError(_) => 65, // EX_DATAERR
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
