//! Math Utilities
//!
//! A small library of stateless `f64` helper functions: linear interpolation,
//! range remapping, clamping, fractional-part extraction, evenly spaced value
//! generation, sine-wave sampling, and degree/radian angle conversion.
//!
//! Every function is a closed-form arithmetic expression: no state, no I/O,
//! no error paths. Malformed numeric input (a zero-width source range, say)
//! propagates the usual IEEE-754 `NaN`/`Inf` results rather than failing
//! through a separate channel.
//!
//! # Quick Start
//!
//! ```
//! use mathutils::{degrees, lerp, lin_space, opposite_angle, radians};
//!
//! let samples = lin_space(0.0, 10.0, 5);
//! assert_eq!(samples, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
//!
//! assert_eq!(lerp(0.0, 10.0, 0.6), 6.0);
//!
//! let facing = opposite_angle(radians(90.0));
//! assert!((degrees(facing) - 270.0).abs() < 1e-9);
//! ```
//!
//! # Function Groups
//!
//! | Group | Functions |
//! |-------|-----------|
//! | Range/interpolation | [`lerp`], [`map_range`], [`clamp`], [`fract`] |
//! | Sequence generation | [`lin_space`], [`sin_space`] |
//! | Angular arithmetic | [`radians`], [`degrees`], [`opposite_angle`] |

#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod angle;
pub mod range;
pub mod space;

// Re-exports for convenient access
pub use angle::{degrees, opposite_angle, radians};
pub use range::{clamp, fract, lerp, map_range};
pub use space::{lin_space, sin_space};
