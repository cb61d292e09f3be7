//! Error types for pixelgeom operations.
//!
//! Geometric degeneracies (zero-length segments, zero radii, parallel
//! edges, pixels outside a buffer) are not errors. Errors are only raised
//! when validating configuration objects such as clip windows.

use thiserror::Error;

/// Errors that can occur when constructing clip windows, supersamplers or filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A clip window needs at least three vertices.
    #[error("clip window needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A clip window edge has zero length.
    #[error("clip window edge {index} has zero length")]
    DegenerateEdge {
        /// Index of the edge's first vertex.
        index: usize,
    },

    /// The clip window is not convex.
    #[error("clip window is not convex")]
    NonConvexWindow,

    /// All clip window vertices are collinear.
    #[error("clip window has zero area")]
    ZeroAreaWindow,

    /// Supersampling factor must be at least one.
    #[error("invalid supersampling factor {factor}")]
    InvalidFactor {
        /// The rejected factor.
        factor: usize,
    },

    /// Convolution kernel size must be at least one.
    #[error("invalid kernel size {size}")]
    InvalidKernel {
        /// The rejected kernel size.
        size: usize,
    },
}
