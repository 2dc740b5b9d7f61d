//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// A corpus holds fewer lines than the run needs
    CorpusTooShort {
        /// Path of the corpus file
        path: String,
        /// Lines read from the file
        lines: usize,
        /// Lines the configured run needs
        required: usize,
    },
    /// Alignment error from core
    AlignmentError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CorpusTooShort {
                path,
                lines,
                required,
            } => write!(
                f,
                "Corpus too short: {path} has {lines} lines, the run needs {required}"
            ),
            CliError::AlignmentError(msg) => write!(f, "Alignment error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<linealign_core::AlignError> for CliError {
    fn from(err: linealign_core::AlignError) -> Self {
        match err {
            linealign_core::AlignError::InvalidConfig(msg) => CliError::ConfigError(msg),
            other => CliError::AlignmentError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
