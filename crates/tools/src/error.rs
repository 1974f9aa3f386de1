//! Error types for the file boundary of the Morse tools

use std::path::PathBuf;
use thiserror::Error;

/// Tool error types
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error {action} file: {}", .path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {msg}", .path.display())]
    Config { path: PathBuf, msg: String },
}

/// Result type for tool I/O operations
pub type Result<T> = std::result::Result<T, ToolError>;
