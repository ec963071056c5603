//! Error types for guidfix

use thiserror::Error;

/// The main error type for guidfix operations
#[derive(Debug, Error)]
pub enum GuidFixError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Invalid GUID '{value}': {reason}")]
    InvalidGuid { value: String, reason: String },
}

/// Result type alias for guidfix operations
pub type Result<T> = std::result::Result<T, GuidFixError>;
