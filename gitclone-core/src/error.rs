//! Error types for the gitclone agent

use thiserror::Error;

/// Result type alias for gitclone operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gitclone operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A git subcommand exited with a non-zero status
    #[error("git {command} failed: {stderr}")]
    Git {
        /// The subcommand and arguments that were run
        command: String,
        /// Captured standard error output
        stderr: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Message transport error
    #[error("Listener error: {0}")]
    Listener(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
