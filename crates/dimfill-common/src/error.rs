//! Common error types used throughout dimfill.
//!
//! This module provides a unified error type covering database failures,
//! schema precondition failures, missing files, image decoding failures,
//! and I/O failures.

/// Common error type for dimfill.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file or row was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The database does not have the expected tables or columns.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A file could not be decoded as an image.
    #[error("Image error: {0}")]
    Image(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new Schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a new Image error.
    pub fn image<S: Into<String>>(msg: S) -> Self {
        Self::Image(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
