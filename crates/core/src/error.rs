//! Error types for deck rendering.
//!
//! Slide content never fails to parse or render; these errors cover the
//! surrounding concerns (I/O, option parsing, font loading, serialization).

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the rendering pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The requested output target is not recognized.
    #[error("Unknown render target: {0} (expected \"html\" or \"svg\")")]
    UnknownTarget(String),

    /// The requested theme preset does not exist.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// A theme color is empty or contains markup or CSS punctuation.
    #[error("Invalid theme value: {0}")]
    InvalidTheme(String),

    /// The requested text alignment is not recognized.
    #[error("Unknown alignment: {0} (expected \"left\" or \"center\")")]
    UnknownAlign(String),

    /// Font data could not be loaded or parsed.
    #[error("Font error: {0}")]
    FontError(String),

    /// Failed to serialize or deserialize JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
