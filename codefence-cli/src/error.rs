//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Input was not valid UTF-8 text
    InvalidEncoding(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidEncoding(path) => write!(f, "Input is not valid UTF-8: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("paste.txt".to_string());
        assert_eq!(error.to_string(), "File not found: paste.txt");
    }

    #[test]
    fn test_invalid_encoding_error_display() {
        let error = CliError::InvalidEncoding("blob.bin".to_string());
        assert_eq!(error.to_string(), "Input is not valid UTF-8: blob.bin");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("paste.txt".to_string());
        let _: &dyn std::error::Error = &error;
    }
}
