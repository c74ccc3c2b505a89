//! Unified error handling for the clustering core.
//!
//! Data-quality problems (missing fields, out-of-range coordinates) are
//! not errors here; the engine degrades by excluding the offending record.
//! Errors are reserved for caller-level type violations, such as a record
//! document that is not valid JSON.

use thiserror::Error;

/// Result type for pincluster operations.
pub type Result<T> = std::result::Result<T, ClusterError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClusterError {
    /// The raw record document could not be parsed at all.
    #[error("malformed record document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
