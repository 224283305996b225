//! Point-in-polygon classification with the turning-angle method.
//!
//! A [`Polygon`] is an immutable ring of vertices. A query point is inside it when the signed
//! angles subtended at the point by the edges of the ring add up to a full turn (see
//! [`turning_angle`]). A [`PolygonSet`] holds several polygons, is replaced as a whole by
//! [`PolygonSet::load`], and tells whether a point is inside any of them.
//!
//! ```
//! use ringsum::{Coordinate, PolygonSet};
//!
//! let set = PolygonSet::new();
//! set.load([[[0., 0.], [10., 0.], [5., 10.]]])?;
//!
//! assert!(set.contains_any(&Coordinate::new(5., 3.)));
//! assert!(!set.contains_any(&Coordinate::new(5., -1.)));
//! # Ok::<(), ringsum::GeometryError>(())
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod coordinate;
mod error;
mod normalize;
mod polygon;
mod polygon_set;
#[cfg(test)]
mod testing;
pub mod turning_angle;
pub mod winding_number;

pub use classifier::PointClassifier;
pub use config::ClassifierConfig;
pub use coordinate::Coordinate;
pub use error::GeometryError;
pub use normalize::Normalization;
pub use polygon::Polygon;
pub use polygon_set::{PolygonSet, Snapshot};
pub use turning_angle::DEFAULT_TOLERANCE;
