//! Core error type for the Xibugo CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Xibugo operations
pub type XibugoResult<T> = Result<T, XibugoError>;

/// Main error type for the Xibugo CLI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XibugoError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A required field is missing or a value was rejected by its parser
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Resource not found (unknown property names end up here)
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
    },

    /// The setup wizard's save confirmation was declined
    #[error("Configuration was not confirmed")]
    NotConfirmed,

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// No configuration file exists at the resolved location
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Encoding or decoding a configuration document failed
    #[error("Serialization error ({format}): {message}")]
    Serialization { message: String, format: String },

    /// Interactive prompt failed
    #[error("Prompt error: {message}")]
    Prompt { message: String },
}

impl XibugoError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "XIBUGO_CONFIG",
            Self::Validation { .. } => "XIBUGO_VALIDATION",
            Self::NotFound { .. } => "XIBUGO_NOT_FOUND",
            Self::NotConfirmed => "XIBUGO_NOT_CONFIRMED",
            Self::Io { .. } => "XIBUGO_IO",
            Self::FileNotFound { .. } => "XIBUGO_FILE_NOT_FOUND",
            Self::Serialization { .. } => "XIBUGO_SERIALIZATION",
            Self::Prompt { .. } => "XIBUGO_PROMPT",
        }
    }

    /// Additional context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }

    /// Whether this error means "there was simply no file to read"
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
