//! Error types for Taproot Core

use thiserror::Error;

/// Result type alias using Taproot's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Taproot error types
#[derive(Error, Debug)]
pub enum Error {
    /// An edge endpoint or traversal start was never registered
    #[error("Nonexistent vertex: {0}")]
    NonexistentVertex(String),

    /// A neighbor lookup named an unknown vertex
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// Removal from an empty queue or stack
    #[error("Cannot remove from empty {0}")]
    EmptyContainer(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
