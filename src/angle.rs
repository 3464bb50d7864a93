//! Degree/radian conversion and opposite-angle computation.
//!
//! Angles in radians use the full-circle measure `TAU` (2π) from
//! `std::f64::consts`.

use std::f64::consts::{PI, TAU};

/// Convert an angle in degrees to radians.
#[inline]
#[must_use]
pub fn radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Convert an angle in radians to degrees.
#[inline]
#[must_use]
pub fn degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Return the angle directly opposite `angle` on the circle, in radians.
///
/// Adds π and wraps the sum back into `[0, TAU)`. The input is assumed to
/// already lie in `[0, TAU)`; out-of-range inputs are not normalized first,
/// so their results may also fall outside `[0, TAU)`.
///
/// # Example
///
/// ```
/// use mathutils::opposite_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(opposite_angle(0.0), PI);
/// assert_eq!(opposite_angle(PI), 0.0);
/// ```
#[inline]
#[must_use]
pub fn opposite_angle(angle: f64) -> f64 {
    let opposite = angle + PI;
    if opposite >= TAU {
        opposite - TAU
    } else {
        opposite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radians_degrees_spot_values() {
        assert_relative_eq!(radians(180.0), PI, epsilon = 1e-9);
        assert_relative_eq!(radians(90.0), PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(radians(-90.0), -PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(degrees(PI), 180.0, epsilon = 1e-9);
        assert_relative_eq!(degrees(TAU), 360.0, epsilon = 1e-9);
        assert_relative_eq!(degrees(-PI / 4.0), -45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_conversion_round_trip() {
        for d in [-720.0, -33.3, 0.0, 1.0, 57.2957795, 359.0, 1080.0] {
            assert_relative_eq!(degrees(radians(d)), d, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_opposite_angle() {
        let cases = [
            (0.0, PI),
            (PI / 2.0, 3.0 * PI / 2.0),
            (PI, 0.0),
            (3.0 * PI / 2.0, PI / 2.0),
            (PI / 4.0, 5.0 * PI / 4.0),
        ];
        for (angle, want) in cases {
            assert_relative_eq!(opposite_angle(angle), want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_opposite_angle_result_in_range() {
        for a in [0.0, 0.1, PI - 1e-6, PI, PI + 1e-6, TAU - 1e-6] {
            let o = opposite_angle(a);
            assert!((0.0..TAU).contains(&o), "opposite_angle({a}) = {o}");
        }
    }

    #[test]
    fn test_opposite_angle_out_of_range_input_passes_through() {
        // Inputs outside [0, TAU) are a documented precondition violation;
        // the offset is still applied without normalization.
        assert_relative_eq!(opposite_angle(-PI / 2.0), PI / 2.0);
        assert_relative_eq!(opposite_angle(3.0 * TAU), 3.0 * TAU - PI, epsilon = 1e-9);
    }
}
