//! Error type used by the crate.

use thiserror::Error;

/// Reasons a vertex ring is refused as a polygon.
///
/// Both variants are "invalid geometry": the offending input is rejected as a whole and nothing
/// that was built before is modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The ring has fewer than 3 vertices.
    #[error("ring #{index} has {count} vertices, a polygon needs at least 3")]
    TooFewVertices {
        /// Position of the ring in the input batch.
        index: usize,
        /// Number of vertices supplied.
        count: usize,
    },
    /// One of the vertices has a NaN or infinite ordinate.
    #[error("ring #{index} has a non-finite coordinate at vertex {vertex}")]
    NonFiniteCoordinate {
        /// Position of the ring in the input batch.
        index: usize,
        /// Position of the vertex in the ring.
        vertex: usize,
    },
}

impl GeometryError {
    /// Returns `true` for every error that signals an unusable ring.
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(
            self,
            Self::TooFewVertices { .. } | Self::NonFiniteCoordinate { .. }
        )
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            Self::TooFewVertices { count, .. } => Self::TooFewVertices { index, count },
            Self::NonFiniteCoordinate { vertex, .. } => {
                Self::NonFiniteCoordinate { index, vertex }
            }
        }
    }
}
