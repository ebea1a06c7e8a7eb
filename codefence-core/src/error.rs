//! Error types for the detection library

use thiserror::Error;

/// Error type for library operations
///
/// Detection itself is infallible over arbitrary input; errors only arise
/// from invalid configuration supplied by the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
