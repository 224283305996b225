use serde::{Deserialize, Serialize};

/// A point of the 2D plane, in whatever coordinate space the caller uses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if neither ordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The vector going from `origin` to `self`.
    pub(crate) fn sub(&self, origin: &Coordinate) -> [f64; 2] {
        [self.x - origin.x, self.y - origin.y]
    }

    /// The vector going from `origin` to `self`, rescaled so that its largest component is `±1`.
    ///
    /// Products of two such vectors stay clear of overflow and of subnormals whatever the
    /// magnitude of the coordinates, and their signs and ratios are those of the raw vectors.
    /// Returns a zero vector when both points are equal.
    pub(crate) fn direction_from(&self, origin: &Coordinate) -> [f64; 2] {
        let mut v = self.sub(origin);
        if !(v[0].is_finite() && v[1].is_finite()) {
            // The difference of two finite values can still overflow
            v = [
                self.x / 2. - origin.x / 2.,
                self.y / 2. - origin.y / 2.,
            ];
        }
        let norm = v[0].abs().max(v[1].abs());
        if norm == 0. {
            return [0., 0.];
        }
        [v[0] / norm, v[1] / norm]
    }
}

pub(crate) fn dot([ux, uy]: [f64; 2], [vx, vy]: [f64; 2]) -> f64 {
    ux * vx + uy * vy
}

/// Z component of the cross product of two vectors of the plane.
pub(crate) fn cross([ux, uy]: [f64; 2], [vx, vy]: [f64; 2]) -> f64 {
    ux * vy - uy * vx
}

impl From<&Coordinate> for [f64; 2] {
    fn from(val: &Coordinate) -> Self {
        [val.x, val.y]
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(val: Coordinate) -> Self {
        (&val).into()
    }
}

impl From<&[f64; 2]> for Coordinate {
    fn from(&[x, y]: &[f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        Self::from(&value)
    }
}

impl From<&Coordinate> for Coordinate {
    fn from(value: &Coordinate) -> Self {
        *value
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(val: Coordinate) -> Self {
        (val.x, val.y)
    }
}
