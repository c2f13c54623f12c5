//! Error types for the CLI

use core_types::SyntaxError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Source failed to scan or parse
    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    /// Tree or tokens could not be rendered
    #[error("render error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
