//! Error types for the hugo-slug library

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum SlugError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Directory or file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Reading a markdown file failed
    #[error("failed to read file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a markdown file (or its backup) failed
    #[error("failed to write file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input source hit end of input before a valid value was entered
    #[error("input closed before a valid value was entered")]
    InputClosed,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SlugError>;

impl SlugError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// The path this error concerns, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileNotFound { path }
            | Self::NotADirectory { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Io(_) | Self::Regex(_) | Self::InputClosed => None,
        }
    }
}
