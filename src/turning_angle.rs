//! Turning-angle (signed angle sum) point-in-ring test.
//!
//! Standing at the query point and looking at every vertex of the ring in turn, the signed angles
//! swept between consecutive vertices add up to `±2π` times the number of times the ring winds
//! around the point: `±2π` for a point inside a simple ring, `0` for a point outside it.
//!
//! The sum is accumulated in floating point, so an outside point leaves a small residual rather
//! than an exact zero. [`DEFAULT_TOLERANCE`] absorbs that residual. It is an angle, in radians,
//! not a distance. Each vector is rescaled before products are taken, so neither the angles nor
//! the residual depend on the magnitude of the coordinates.
//!
//! Points lying exactly on an edge or on a vertex have no well-defined answer: an edge through
//! the point contributes `±π` depending on rounding, and a vertex on the point contributes
//! nothing. Do not rely on either outcome.

use itertools::Itertools;

use crate::coordinate::{cross, dot, Coordinate};

/// Angle sums whose magnitude is above this value are considered to wind around the point.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Signed angle `∠(a, p, b)`, in `(-π, π]`, going from the ray `p→a` to the ray `p→b`.
///
/// Positive when turning counter-clockwise. Returns `0` when `a` or `b` coincides with `p`.
pub fn signed_angle(a: &Coordinate, p: &Coordinate, b: &Coordinate) -> f64 {
    let pa = a.direction_from(p);
    let pb = b.direction_from(p);
    if pa == [0., 0.] || pb == [0., 0.] {
        return 0.;
    }
    cross(pa, pb).atan2(dot(pa, pb))
}

/// Sum of the signed angles subtended at `point` by every edge of `ring`, closing edge included.
pub fn angle_sum(point: &Coordinate, ring: &[Coordinate]) -> f64 {
    ring.iter()
        .circular_tuple_windows()
        .map(|(a, b)| signed_angle(a, point, b))
        .sum()
}

/// Returns `true` if `|angle_sum(point, ring)| > tolerance`.
pub fn winds_around(point: &Coordinate, ring: &[Coordinate], tolerance: f64) -> bool {
    angle_sum(point, ring).abs() > tolerance
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    fn ring(vertices: &[[f64; 2]]) -> Vec<Coordinate> {
        vertices.iter().map(Coordinate::from).collect()
    }

    #[rstest]
    #[case([1., 0.], [0., 1.], FRAC_PI_2)]
    #[case([0., 1.], [1., 0.], -FRAC_PI_2)]
    #[case([1., 0.], [2., 0.], 0.)]
    #[case([1., 0.], [-1., 0.], PI)]
    #[case([1., 0.], [1., 1.], PI / 4.)]
    fn signed_angles(#[case] a: [f64; 2], #[case] b: [f64; 2], #[case] expected: f64) {
        let origin = Coordinate::default();

        let angle = signed_angle(&a.into(), &origin, &b.into());

        assert_abs_diff_eq!(angle, expected, epsilon = 1e-12);
    }

    #[test]
    fn angle_at_coincident_vertex_is_zero() {
        let p = Coordinate::new(3., 4.);

        assert_eq!(signed_angle(&p, &p, &Coordinate::new(5., 5.)), 0.);
        assert_eq!(signed_angle(&Coordinate::new(5., 5.), &p, &p), 0.);
        assert_eq!(signed_angle(&p, &p, &p), 0.);
    }

    #[test]
    fn triangle_angle_sums() {
        let triangle = ring(&[[0., 0.], [10., 0.], [5., 10.]]);

        let centroid = angle_sum(&Coordinate::new(5., 10. / 3.), &triangle);
        let below = angle_sum(&Coordinate::new(5., -1.), &triangle);
        let far = angle_sum(&Coordinate::new(20., 20.), &triangle);

        assert_abs_diff_eq!(centroid, TAU, epsilon = 1e-9);
        assert!(below.abs() < DEFAULT_TOLERANCE);
        assert!(far.abs() < 1e-12);
    }

    #[test]
    fn clockwise_ring_sums_to_minus_two_pi() {
        let triangle = ring(&[[5., 10.], [10., 0.], [0., 0.]]);

        assert_abs_diff_eq!(
            angle_sum(&Coordinate::new(5., 3.), &triangle),
            -TAU,
            epsilon = 1e-9
        );
    }

    #[test]
    fn duplicate_consecutive_vertices_contribute_nothing() {
        let square = ring(&[[0., 0.], [1., 0.], [1., 0.], [1., 1.], [0., 1.], [0., 1.]]);
        let point = Coordinate::new(0.5, 0.5);

        assert_abs_diff_eq!(angle_sum(&point, &square), TAU, epsilon = 1e-9);
        assert!(winds_around(&point, &square, DEFAULT_TOLERANCE));
        assert!(!winds_around(&Coordinate::new(2., 0.5), &square, DEFAULT_TOLERANCE));
    }

    #[test]
    fn doubly_wound_region_sums_to_four_pi() {
        // Same "L" with an outgrowth as in the winding number tests.
        let ring = ring(&[
            [0., 0.],
            [1., 0.],
            [1., 0.8],
            [0.2, 0.8],
            [0.2, 0.5],
            [0.8, 0.5],
            [0.8, 0.2],
            [0.5, 0.2],
            [0.5, 1.],
            [0., 1.],
        ]);

        assert_abs_diff_eq!(
            angle_sum(&Coordinate::new(0.4, 0.6), &ring),
            2. * TAU,
            epsilon = 1e-9
        );
        assert!(!winds_around(
            &Coordinate::new(0.6, 0.3),
            &ring,
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn far_away_point_leaves_tiny_residual() {
        let ring = ring(&[
            [615.4742, 279.41208],
            [652.7536, 330.98193],
            [686.3051, 442.8202],
            [642.81244, 507.4378],
            [571.3602, 506.1952],
            [560.1, 400.2],
        ]);

        let sum = angle_sum(&Coordinate::new(1e6, -1e6), &ring);

        assert!(sum.abs() < DEFAULT_TOLERANCE, "residual {sum} too large");
    }

    #[rstest]
    #[case(1e-300)]
    #[case(1e-160)]
    #[case(1.)]
    #[case(1e160)]
    #[case(1e300)]
    fn triangle_at_extreme_magnitudes(#[case] scale: f64) {
        let triangle = ring(&[[0., 0.], [10. * scale, 0.], [5. * scale, 10. * scale]]);
        let classify = |x: f64, y: f64| {
            winds_around(
                &Coordinate::new(x * scale, y * scale),
                &triangle,
                DEFAULT_TOLERANCE,
            )
        };

        assert!(classify(5., 10. / 3.));
        assert!(!classify(5., -1.));
        assert!(!classify(20., 20.));
        assert_abs_diff_eq!(
            angle_sum(&Coordinate::new(5. * scale, 10. / 3. * scale), &triangle),
            TAU,
            epsilon = 1e-9
        );
    }

    #[test]
    fn triangle_spanning_the_whole_float_range() {
        let max = f64::MAX / 2.;
        let triangle = ring(&[[-max, -max], [max, -max], [0., max]]);

        assert!(winds_around(&Coordinate::default(), &triangle, DEFAULT_TOLERANCE));
        // Differences to the far vertices overflow here
        assert!(!winds_around(
            &Coordinate::new(-f64::MAX, 0.),
            &triangle,
            DEFAULT_TOLERANCE
        ));
        assert!(!winds_around(
            &Coordinate::new(0., f64::MAX),
            &triangle,
            DEFAULT_TOLERANCE
        ));
    }
}
