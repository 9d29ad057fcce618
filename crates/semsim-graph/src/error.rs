//! Error types for taxonomy graph operations.
//!
//! Traversal primitives and the constrained path search are total: they
//! report "no path" / "no ancestor" through `Option` or empty results and
//! never fail. Errors only arise at the construction and configuration
//! boundaries: building a [`Taxonomy`](crate::storage::Taxonomy), loading a
//! taxonomy document, and validating configuration values.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for graph construction and configuration.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Graph Structure Errors ==========
    /// Node not found in graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // ========== Validation Errors ==========
    /// Invalid input provided to a function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========== Serialization Errors ==========
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ========== Error Conversions ==========

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        // A failed read keeps its io::Error; everything else is a bad document.
        if err.is_io() {
            GraphError::Io(err.into())
        } else {
            GraphError::Deserialization(err.to_string())
        }
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
