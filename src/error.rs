//! Error types for the unwiki library.

use std::io;
use thiserror::Error;

/// Result type alias for unwiki operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching or converting an article.
#[derive(Error, Debug)]
pub enum Error {
    /// Network, transport, or HTTP-status failure retrieving the source page.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Error during rendering (JSON serialization).
    #[error("rendering error: {0}")]
    Render(String),

    /// I/O error when writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
