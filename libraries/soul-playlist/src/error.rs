//! Error types for playlists

use soul_order::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid directory path: {0}")]
    InvalidPath(String),

    #[error("Directory not found: {0}")]
    FileNotFound(String),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
