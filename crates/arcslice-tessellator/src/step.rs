//! Angular step math shared by both tessellation modes.
//!
//! Sample counts are computed once from the span and the step, and sample
//! angles are derived from the sample index. Accumulating `angle += step`
//! drifts and either overshoots the final angle or drops the last sample.

use arcslice_core::TessellationError;
use std::f64::consts::TAU;

/// Relative slack applied when dividing a span by a step, so that exact
/// divisions such as `90 / 45` are not pushed to the next integer by rounding.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// Angular step in radians whose arc length at `radius` equals `max_len`.
///
/// arc length = r * theta, so theta = max_len / r. `radius` must be non-zero.
#[inline]
pub fn step_in_radians(radius: f64, max_len: f64) -> f64 {
    max_len / radius
}

/// Angular step in degrees whose arc length at `radius` equals `max_len`.
///
/// arc length = 2 * PI * r * (theta / 360), so theta = 360 * max_len / (2 * PI * r).
#[inline]
pub fn step_in_degrees(radius: f64, max_len: f64) -> f64 {
    max_len * 360.0 / (TAU * radius)
}

/// Smallest number of segments no longer than `step` that cover `span`.
///
/// A zero span needs no segment. Saturates at `u64::MAX` when the step is
/// vanishingly small compared to the span.
pub fn segment_count(span: f64, step: f64) -> u64 {
    if span <= 0.0 {
        return 0;
    }
    let ratio = span / step;
    let count = (ratio * (1.0 - STEP_TOLERANCE)).ceil().max(1.0);
    count as u64
}

/// Largest number of whole steps that fit in `span`.
pub fn whole_steps(span: f64, step: f64) -> u64 {
    if span <= 0.0 {
        return 0;
    }
    let ratio = span / step;
    (ratio * (1.0 + STEP_TOLERANCE)).floor() as u64
}

/// Number of samples for `segments` segments, checked against `limit`.
pub fn checked_sample_count(segments: u64, limit: usize) -> Result<usize, TessellationError> {
    let requested = segments.saturating_add(1);
    if requested > limit as u64 {
        return Err(TessellationError::TooManySamples { requested, limit });
    }
    Ok(requested as usize)
}
