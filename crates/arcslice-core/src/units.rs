//! Angle unit conversion utilities
//!
//! Arc parameters are expressed in degrees at the API boundary and
//! converted to radians before any trigonometric work.

use std::f64::consts::PI;

/// Degrees in a full turn; also the upper bound of a valid arc angle.
pub const FULL_TURN_DEGREES: f64 = 360.0;

const RADIANS_PER_DEGREE: f64 = PI / 180.0;
const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}
