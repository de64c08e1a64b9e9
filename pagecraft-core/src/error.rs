//! Error types for builder operations.

use thiserror::Error;

use crate::NodeId;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur in builder operations.
///
/// Refused gestures (an invalid drop, removing an unknown node) are not
/// errors; they surface as outcome values instead.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A node was added under a parent that does not exist.
    #[error("Invalid parent: node {0} does not exist")]
    InvalidParent(NodeId),

    /// A loaded snapshot violates the forest invariants.
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Snapshot serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
