//! Centralized error handling for rigcheck

use std::io;
use thiserror::Error;

/// Custom error type for rigcheck operations
#[derive(Error, Debug)]
pub enum RigcheckError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed caller input (missing keys, non-numeric or out-of-range values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// TOML parsing errors (config and score table files)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Local hardware detection errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// Title lookup collaborator errors
    #[error("Lookup error: {0}")]
    Lookup(String),
}

/// Type alias for Results in rigcheck
pub type Result<T> = std::result::Result<T, RigcheckError>;
