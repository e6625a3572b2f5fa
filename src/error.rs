//! Error types for the shoulder rehabilitation library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Frame capture source failed
    #[error("Capture error: {0}")]
    Capture(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Landmark trace parsing error
    #[error("Trace format error: {0}")]
    TraceFormat(String),

    /// Report assembly or serialization error
    #[error("Report error: {0}")]
    Report(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
