//! Adaptive tessellation.
//!
//! Each ring derives its own angular step from a maximum arc length, so the
//! inner and outer rings usually end up with different vertex counts. Samples
//! are spread evenly over the span: with `n` segments the ring is sampled at
//! `start + span * i / n` for `i = 0..=n`, the last sample sitting exactly on
//! the final angle.

use crate::params::{ensure_positive, ArcParams, TessellationOptions};
use crate::polygon_arc::PolygonArc;
use crate::ring::{polar_point, sample_ring};
use crate::step::{checked_sample_count, segment_count, step_in_radians};
use arcslice_core::{deg_to_rad, Point2D, TessellationError};
use tracing::debug;

/// Tessellate `params` so that no segment's arc length on either ring
/// exceeds `max_distance`.
///
/// `max_distance` is expressed in the angular unit of the angles (degrees)
/// and converted to radians before use.
pub fn tessellate(
    params: &ArcParams,
    max_distance: f64,
    options: &TessellationOptions,
) -> Result<PolygonArc, TessellationError> {
    params.validate()?;
    ensure_positive("max_distance", max_distance)?;

    let sweep = Sweep {
        start: deg_to_rad(params.start_angle),
        end: deg_to_rad(params.end_angle),
        span: deg_to_rad(params.span()),
    };
    let max_len = deg_to_rad(max_distance);
    let limit = options.max_samples_per_ring;

    let outer = adaptive_ring(params.center, params.outer_radius, sweep, max_len, limit)?;
    let inner = adaptive_ring(params.center, params.inner_radius, sweep, max_len, limit)?;

    debug!(
        inner = inner.len(),
        outer = outer.len(),
        "Adaptive tessellation of {}..{} degrees",
        params.start_angle,
        params.end_angle
    );

    Ok(PolygonArc::from_rings(params, inner, outer))
}

/// Angular range of a tessellation, in radians.
#[derive(Clone, Copy)]
struct Sweep {
    start: f64,
    end: f64,
    span: f64,
}

fn adaptive_ring(
    center: Point2D,
    radius: f64,
    sweep: Sweep,
    max_len: f64,
    limit: usize,
) -> Result<Vec<Point2D>, TessellationError> {
    // A zero radius would blow up the step formula; the ring is just the center.
    if radius == 0.0 {
        return Ok(vec![center]);
    }

    let Sweep { start, end, span } = sweep;
    let mut segments = segment_count(span, step_in_radians(radius, max_len));
    // A span too narrow to move the sample off the start point is a zero span.
    if segments == 1 && polar_point(center, radius, start) == polar_point(center, radius, end) {
        segments = 0;
    }
    let count = checked_sample_count(segments, limit)?;
    let last = count - 1;

    Ok(sample_ring(center, radius, count, |i| {
        if i == last {
            end
        } else {
            start + span * (i as f64 / last as f64)
        }
    }))
}
