//! Crossing-based winding number.
//!
//! This is the integer counterpart of [`turning_angle`](crate::turning_angle): instead of summing
//! angles it counts signed upward/downward crossings of a horizontal ray. It only uses
//! comparisons and one cross product per crossing, so it is exact on the side of the edges it
//! decides, and is used to cross-check the angle sum.
//!
//! For more information, see <https://web.archive.org/web/20130126163405/http://geomalgorithms.com/a03-_inclusion.html>.

use itertools::Itertools;

use crate::coordinate::{cross, Coordinate};

/// Positioning of a [`Coordinate`] with respect to a line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Positioning {
    /// Counter-clockwise side of the directed line.
    Left,
    /// Exactly on the line.
    On,
    /// Clockwise side of the directed line.
    Right,
}

/// Tests if `point` is Left|On|Right of the infinite line going through `p1` then `p2`.
pub fn position(point: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> Positioning {
    match cross(p2.direction_from(p1), point.direction_from(p1)).total_cmp(&0.) {
        std::cmp::Ordering::Greater => Positioning::Left,
        std::cmp::Ordering::Less => Positioning::Right,
        std::cmp::Ordering::Equal => Positioning::On,
    }
}

/// Computes the winding number of `ring` around `point`.
///
/// This number can be:
/// - `0` if the point is not inside the ring
/// - `> 0` if the ring winds around the point counter-clockwise (once per unit)
/// - `< 0` if the ring winds around the point clockwise
///
/// Left and bottom edges count as inside, right and top edges as outside.
pub fn winding_number<I>(point: &Coordinate, ring: I) -> isize
where
    I: IntoIterator,
    <I as IntoIterator>::IntoIter: Clone,
    <I as IntoIterator>::IntoIter: ExactSizeIterator,
    <I as IntoIterator>::Item: Into<Coordinate>,
    <I as IntoIterator>::Item: Clone,
{
    let mut wn = 0;
    for (a, b) in ring.into_iter().circular_tuple_windows() {
        let (a, b): (Coordinate, Coordinate) = (a.into(), b.into());
        if a.y <= point.y {
            // an upward crossing
            if b.y > point.y && position(point, &a, &b) == Positioning::Left {
                wn += 1;
            }
        } else if b.y <= point.y && position(point, &a, &b) == Positioning::Right {
            // a downward crossing
            wn -= 1;
        }
    }
    wn
}

/// Returns `true` if the winding number of `ring` around `point` is not zero.
pub fn is_inside<I>(point: &Coordinate, ring: I) -> bool
where
    I: IntoIterator,
    <I as IntoIterator>::IntoIter: Clone,
    <I as IntoIterator>::IntoIter: ExactSizeIterator,
    <I as IntoIterator>::Item: Into<Coordinate>,
    <I as IntoIterator>::Item: Clone,
{
    winding_number(point, ring) != 0
}
