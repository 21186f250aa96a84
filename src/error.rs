//! Error types and Result aliases for termfolio

use std::path::PathBuf;

/// Result type alias for termfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termfolio
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Theme not found
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    /// Color string is not `#rrggbb`
    #[error("Invalid hex color: '{0}'")]
    InvalidColor(String),

    // === Resource errors ===
    /// Bundled resource is missing
    #[error("Resource not found: '{}'", .path.display())]
    ResourceNotFound { path: PathBuf },

    /// Saving a resource to the download directory failed
    #[error("Failed to save '{}': {reason}", .path.display())]
    DownloadFailed { path: PathBuf, reason: String },

    /// No directory to save downloads into
    #[error("No download directory available")]
    NoDownloadDirectory,

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
