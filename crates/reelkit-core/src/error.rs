//! Error types for ReelKit.
//!
//! Every variant is recoverable: failures reject an operation and leave the
//! library and timeline in their last well-formed state.

use thiserror::Error;

use crate::clip::Category;
use crate::id::ClipId;

/// Main error type for ReelKit operations.
#[derive(Error, Debug)]
pub enum ReelKitError {
    #[error("invalid duration: {0} (must be a non-negative number of seconds)")]
    InvalidDuration(f64),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("metadata extraction failed: {0}")]
    MetadataExtractionFailed(String),

    #[error("clip not found: {0}")]
    ClipNotFound(ClipId),

    #[error("timeline is not ready: missing {}", format_missing(.0))]
    NotReady(Vec<Category>),

    #[error("a generation request is already in flight")]
    AlreadyInFlight,

    #[error("merge failed: {0}")]
    Merge(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_missing(missing: &[Category]) -> String {
    let labels: Vec<&str> = missing.iter().map(|c| c.label()).collect();
    labels.join(", ")
}

/// Result type alias for ReelKit operations.
pub type Result<T> = std::result::Result<T, ReelKitError>;
