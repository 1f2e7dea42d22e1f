// src/error.rs

//! Crate-wide error type and result alias

use thiserror::Error;

/// Errors produced while constructing clients or transferring data.
/// Record serialization has no fatal path of its own: unknown keys are
/// skipped and absent keys fall back to defaults.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to construct a component (e.g. the HTTP client)
    #[error("Initialization error: {0}")]
    InitError(String),

    /// Network-level or HTTP-status failure during a transfer
    #[error("Download error: {0}")]
    DownloadError(String),

    /// Filesystem failure while persisting transferred bytes
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
