use std::sync::Arc;

use crate::classifier::PointClassifier;
use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::turning_angle::{angle_sum, winds_around, DEFAULT_TOLERANCE};
use crate::winding_number::winding_number;

/// A simple polygon, given by its ring of vertices.
///
/// The ring is implicitly closed: the last vertex is connected back to the first one and should
/// not repeat it (see [`Polygon::from_closed_ring`] for input that does).
///
/// A `Polygon` is an immutable value. Cloning it is cheap, the vertices are shared.
///
/// # Limitations
///
/// The ring is not checked for self-intersections. Containment then follows the angle sum: a
/// region the ring winds around twice reads as inside, a region it winds around zero times reads
/// as outside. Points lying exactly on the boundary may be classified either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Arc<[Coordinate]>,
}

impl Polygon {
    /// Constructs a new `Polygon` from its ring of vertices.
    ///
    /// Fails if there are fewer than 3 vertices or if a vertex is not finite.
    pub fn new<I>(vertices: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        let vertices: Vec<Coordinate> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                index: 0,
                count: vertices.len(),
            });
        }
        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { index: 0, vertex });
        }

        Ok(Self {
            vertices: vertices.into(),
        })
    }

    /// Constructs a new `Polygon` from a ring whose last vertex may repeat the first one.
    ///
    /// This is how rings come out of well-known text and other OGC formats. The closing vertex
    /// is dropped before validation, so `[a, b, a]` is still refused.
    pub fn from_closed_ring<I>(vertices: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        let mut vertices: Vec<Coordinate> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self::new(vertices)
    }

    /// The vertices of the ring, in the order they were given.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Number of vertices in the ring.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a polygon has at least 3 vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The same polygon with the opposite orientation.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Sum of the signed angles subtended at `point` by the edges of the ring.
    ///
    /// See [`turning_angle`](crate::turning_angle) for what the value means.
    pub fn angle_sum(&self, point: &Coordinate) -> f64 {
        angle_sum(point, &self.vertices)
    }

    /// Returns `true` if the polygon contains `point`, using [`DEFAULT_TOLERANCE`].
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.contains_with_tolerance(point, DEFAULT_TOLERANCE)
    }

    /// Returns `true` if the magnitude of the angle sum at `point` is above `tolerance`.
    pub fn contains_with_tolerance(&self, point: &Coordinate, tolerance: f64) -> bool {
        winds_around(point, &self.vertices, tolerance)
    }

    /// Integer winding number of the ring around `point`, computed by counting edge crossings.
    ///
    /// This is independent from the angle sum and can be used to cross-check it.
    pub fn winding_number(&self, point: &Coordinate) -> isize {
        winding_number(point, self.vertices.iter())
    }
}

impl PointClassifier for Polygon {
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.contains(&point.into())
    }
}
