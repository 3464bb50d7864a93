//! Scalar interpolation, remapping, and clamping.
//!
//! These helpers are total over well-formed inputs and perform no input
//! validation: degenerate ranges propagate IEEE-754 `NaN`/`Inf` results.

/// Linearly interpolate between `start` and `end` by fraction `t`.
///
/// `t = 0` returns `start`, `t = 1` returns `end`. Values of `t` outside
/// `[0, 1]` extrapolate along the same line.
///
/// # Example
///
/// ```
/// use mathutils::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0); // extrapolation
/// ```
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}

/// Map a value `v` from the range `[a, b]` to the range `[c, d]`.
///
/// The caller must ensure `a != b`; a zero-width source range divides by
/// zero and yields `NaN` or `Inf` per standard floating-point semantics.
///
/// # Example
///
/// ```
/// use mathutils::map_range;
///
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// ```
#[inline]
#[must_use]
pub fn map_range(v: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    (v - a) / (b - a) * (d - c) + c
}

/// Restrict `value` to the range `[min, max]`.
///
/// Implemented with literal comparisons: values below `min` return `min`,
/// values above `max` return `max`. An inverted range (`min > max`) is not
/// rejected and follows those comparisons as written, which the caller is
/// responsible for avoiding.
// Not f64::clamp, which asserts min <= max.
#[allow(clippy::manual_clamp)]
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Fractional part of `x`, sign-preserving.
///
/// Returns `x - trunc(x)`: the result lies in `[0, 1)` for `x >= 0` and in
/// `(-1, 0]` for `x < 0`, carrying the sign of the input.
///
/// # Example
///
/// ```
/// use mathutils::fract;
///
/// assert!((fract(1.3234) - 0.3234).abs() < 1e-9);
/// assert!((fract(-1.3234) + 0.3234).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn fract(x: f64) -> f64 {
    x - x.trunc()
}
