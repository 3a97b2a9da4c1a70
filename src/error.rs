//! Error types for todone
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad task text, item number outside the list)
//! - 4: Operation failed (I/O, config, missing home directory)

use thiserror::Error;

/// Exit codes for the todone CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todone operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid task text: {0}")]
    InvalidTask(String),

    #[error("No task at index {index}: the current view has {len} task(s)")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid item number {0}: numbering starts at 1")]
    InvalidItemNumber(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Could not determine the user home directory")]
    HomeNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidTask(_)
            | Error::OutOfRange { .. }
            | Error::InvalidItemNumber(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            // Operation failures
            Error::HomeNotFound
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error output, where the error has any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::OutOfRange { index, len } => Some(serde_json::json!({
                "index": index,
                "len": len,
            })),
            Error::InvalidItemNumber(number) => Some(serde_json::json!({
                "number": number,
            })),
            _ => None,
        }
    }

    /// Stable machine-readable category for JSON output
    pub fn kind(&self) -> &'static str {
        match self.exit_code() {
            exit_codes::USER_ERROR => "user_error",
            _ => "operation_failed",
        }
    }
}

/// Result type alias for todone operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
            details: err.details(),
        }
    }
}
