//! Affine pre-processing of incoming coordinates.
//!
//! Rings read from files are often in a different space than the one queries are made in (for
//! example geographic degrees versus canvas pixels). A [`Normalization`] shifts and scales them
//! before they are turned into polygons: `(x, y) -> ((x - offset_x) * scale, (y - offset_y) * scale)`.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Offset then scale, applied to every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalization {
    /// Subtracted from every coordinate first.
    pub offset: [f64; 2],
    /// Multiplies the shifted coordinate.
    pub scale: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Normalization {
    /// Leaves coordinates untouched.
    pub const IDENTITY: Self = Self {
        offset: [0., 0.],
        scale: 1.,
    };

    /// Creates a new `Normalization`.
    pub fn new(offset: [f64; 2], scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns `true` if coordinates are left untouched.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Normalizes one coordinate.
    pub fn apply(&self, point: Coordinate) -> Coordinate {
        let [ox, oy] = self.offset;
        Coordinate::new((point.x - ox) * self.scale, (point.y - oy) * self.scale)
    }

    /// Normalizes every vertex of a ring.
    pub fn apply_ring<I>(&self, ring: I) -> Vec<Coordinate>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        ring.into_iter().map(|p| self.apply(p.into())).collect()
    }

    /// Normalizes every vertex of several rings.
    pub fn apply_rings<R, I>(&self, rings: R) -> Vec<Vec<Coordinate>>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        rings.into_iter().map(|ring| self.apply_ring(ring)).collect()
    }
}
