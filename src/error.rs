//! Centralized error handling for sysfetch

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for sysfetch operations
#[derive(Debug, Error)]
pub enum SysfetchError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A specific file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file or directory could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file exists but is not valid for the expected schema
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// Art import rejected before anything was written
    #[error("Import error: {0}")]
    Import(String),
}

impl SysfetchError {
    pub(crate) fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SysfetchError::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SysfetchError::WriteFile {
            path: path.into(),
            source,
        }
    }
}

/// Why a config document was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Syntax(#[from] ini::ParseError),

    #[error("[{section}] {key} = {value:?}: expected {expected}")]
    Value {
        section: String,
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Type alias for Results in sysfetch
pub type Result<T> = std::result::Result<T, SysfetchError>;
