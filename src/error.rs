use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a Paprika export
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to read or write a file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse a recipe document or serialize the output document
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failed to open or read a bulk export archive
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    /// Recipe document parsed, but is not a JSON object
    #[error("recipe document is not a JSON object")]
    NotAnObject,

    /// Embedded photo is not valid base64
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// Embedded photo is present but is not a string
    #[error("photo_data is not a base64 string")]
    PhotoNotText,

    /// The input path is neither a file nor a directory
    #[error("{} is neither a directory nor a file.", .0.display())]
    InvalidInput(PathBuf),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
