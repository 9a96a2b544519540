//! # Mesh Errors
//!
//! Error types for mesh combination operations.

use thiserror::Error;

/// Errors that can occur while reading, writing or combining meshes.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Write attempted on a read-only mesh view
    #[error("Unsupported: {message}")]
    Unsupported {
        /// The rejected operation
        message: String,
    },

    /// Topology that cannot be converted to triangles
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What was found and where
        message: String,
    },

    /// Source data violates a mesh invariant
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The violated invariant
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count the operation would produce
        count: usize,
        /// Allowed maximum
        max: usize,
    },

    /// Submesh index past the end of the submesh list
    #[error("Submesh {index} out of range (count: {count})")]
    SubmeshOutOfRange {
        /// Requested submesh
        index: usize,
        /// Number of submeshes present
        count: usize,
    },
}

impl MeshError {
    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
