//! Error types for Nusantara

use thiserror::Error;

/// Failure to resolve an opaque resource handle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No string is registered under the label key
    #[error("Missing label resource: {0}")]
    MissingLabel(String),

    /// No image is registered under the image key
    #[error("Missing image resource: {0}")]
    MissingImage(String),
}

/// Orientation string was neither "portrait" nor "landscape"
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown orientation '{0}' (expected 'portrait' or 'landscape')")]
pub struct ParseOrientationError(pub String);

/// Result type alias for resource lookups
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;
