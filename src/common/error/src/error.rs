//! Core error types for Cinegraph.

use thiserror::Error;

/// Result type alias using `CatalogError`.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Invalid parameter provided to a query operation.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Graph integrity violation detected while building the catalog
    /// (duplicate identifier, role referencing a missing entity, ...).
    #[error("IntegrityError: {0}")]
    Integrity(String),

    /// Catalog document could not be loaded.
    #[error("LoadError: {0}")]
    Load(String),

    /// Internal error (bug in Cinegraph).
    #[error("InternalError: {0}")]
    Internal(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `Integrity` error.
    pub fn integrity<S: Into<String>>(msg: S) -> Self {
        Self::Integrity(msg.into())
    }

    /// Create a new `Load` error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        Self::Load(msg.into())
    }

    /// Create a new `Internal` error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Return early with an `Integrity` error.
#[macro_export]
macro_rules! integrity_err {
    ($($arg:tt)*) => {
        return Err($crate::CatalogError::Integrity(format!($($arg)*)))
    };
}
