//! Error types for rentreport-core
//!
//! Errors carry a stable code for API responses and a severity used when
//! logging them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentreport_store::StoreError;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Document store read failed
    StoreError,
    /// Session has no branch code
    NoBranch,
    /// A newer load replaced this one
    Superseded,
    /// CSV export failed
    ExportError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::StoreError => write!(f, "STORE_ERROR"),
            ErrorCode::NoBranch => write!(f, "NO_BRANCH"),
            ErrorCode::Superseded => write!(f, "SUPERSEDED"),
            ErrorCode::ExportError => write!(f, "EXPORT_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Debug information
    Debug,
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Debug => write!(f, "debug"),
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for rentreport-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("No branch code in session")]
    NoBranch,

    #[error("Load for branch {branch} was superseded by a newer load")]
    Superseded { branch: String },

    #[error("Export error: {message}")]
    Export { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Store { .. } => ErrorCode::StoreError,
            CoreError::NoBranch => ErrorCode::NoBranch,
            CoreError::Superseded { .. } => ErrorCode::Superseded,
            CoreError::Export { .. } => ErrorCode::ExportError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Store { .. } => ErrorSeverity::Error,
            CoreError::NoBranch => ErrorSeverity::Info,
            CoreError::Superseded { .. } => ErrorSeverity::Debug,
            CoreError::Export { .. } => ErrorSeverity::Error,
        }
    }

    /// Log this error at a level matching its severity
    pub fn log(&self, operation: &str) {
        match self.severity() {
            ErrorSeverity::Debug => log::debug!(target: "rentreport::error", "[{}] {} - Operation: {}", self.code(), self, operation),
            ErrorSeverity::Info => log::info!(target: "rentreport::error", "[{}] {} - Operation: {}", self.code(), self, operation),
            ErrorSeverity::Warning => log::warn!(target: "rentreport::error", "[{}] {} - Operation: {}", self.code(), self, operation),
            ErrorSeverity::Error => log::error!(target: "rentreport::error", "[{}] {} - Operation: {}", self.code(), self, operation),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<StoreError> for CoreError {
    fn from(error: StoreError) -> Self {
        CoreError::Store { message: error.to_string() }
    }
}

impl From<csv::Error> for CoreError {
    fn from(error: csv::Error) -> Self {
        CoreError::Export { message: error.to_string() }
    }
}
