//! Evenly spaced sequence generation.

use std::f64::consts::TAU;

/// Return `n` evenly spaced values from `min` to `max` inclusive.
///
/// Element `i` equals `min + i * (max - min) / (n - 1)`, so the first
/// element is exactly `min` and the last is `max` up to floating-point
/// rounding. If `n <= 1`, the result is a single-element vector holding
/// `min`.
///
/// # Example
///
/// ```
/// use mathutils::lin_space;
///
/// assert_eq!(lin_space(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// assert_eq!(lin_space(3.0, 7.0, 0), vec![3.0]);
/// ```
#[must_use]
pub fn lin_space(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![min];
    }
    let d = max - min;
    let l = (n - 1) as f64;
    (0..n).map(|i| min + (i as f64) * d / l).collect()
}

/// Sample one period of a sine wave at `n` points, scaled by `amplitude`.
///
/// The sample parameters come from [`lin_space`]`(0, TAU, n)`, so the last
/// point evaluates `sin(TAU)`: nearly, but not exactly, equal to the first
/// sample. Inclusive-endpoint sampling over a periodic function keeps that
/// quirk; callers wanting a seamless loop should drop the final sample.
#[must_use]
pub fn sin_space(amplitude: f64, n: usize) -> Vec<f64> {
    let mut values = lin_space(0.0, TAU, n);
    for t in &mut values {
        *t = t.sin() * amplitude;
    }
    values
}
