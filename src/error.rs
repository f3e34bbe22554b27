//! Centralized error handling for qfetch

use thiserror::Error;

/// Failure modes for a fetch run. There is no local recovery: the first
/// failing probe aborts the whole run and no info panel is printed.
#[derive(Error, Debug)]
pub enum QfetchError {
    /// Operating system outside the supported set
    #[error("operating system '{0}' isn't supported by qfetch")]
    UnsupportedPlatform(String),
    /// Shell other than zsh or bash
    #[error("shell '{0}' isn't supported by qfetch, expected zsh or bash")]
    UnsupportedShell(String),
    /// An external command failed or produced output we couldn't interpret
    #[error("{0}")]
    Probe(String),
    /// I/O errors (file reading, command spawning)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results in qfetch
pub type Result<T> = std::result::Result<T, QfetchError>;
