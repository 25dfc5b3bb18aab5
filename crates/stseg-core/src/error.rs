//! Error types for the stseg-core library.

use thiserror::Error;

/// Main error type for the stseg library.
///
/// Segmentation itself is total over any input string and never fails; errors
/// only arise from the surrounding file and configuration handling.
#[derive(Error, Debug)]
pub enum StsegError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the stseg library.
pub type Result<T> = std::result::Result<T, StsegError>;
