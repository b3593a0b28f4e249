//! Fixed-step tessellation.
//!
//! Inner and outer rings are sampled at the same angles, `start + i * step`,
//! so every inner vertex has a radially aligned outer partner. The final
//! angle is rounded up to a whole number of steps, which may extend the
//! polygon slightly past the requested final angle.

use crate::params::{ensure_positive, ArcParams, SnapOrigin, TessellationOptions};
use crate::polygon_arc::PolygonArc;
use crate::ring::sample_ring;
use crate::step::{checked_sample_count, segment_count, whole_steps};
use arcslice_core::{deg_to_rad, rad_to_deg, TessellationError};
use tracing::debug;

/// Tessellate `params` with a single angular `step` in degrees shared by
/// both rings.
pub fn tessellate(
    params: &ArcParams,
    step: f64,
    options: &TessellationOptions,
) -> Result<PolygonArc, TessellationError> {
    params.validate()?;
    ensure_positive("step", step)?;

    let start = deg_to_rad(params.start_angle);
    let end = deg_to_rad(params.end_angle);
    let step = deg_to_rad(step);

    let segments = snapped_segments(start, end, step, options.snap_origin);
    let count = checked_sample_count(segments, options.max_samples_per_ring)?;
    let angle_at = |i: usize| start + i as f64 * step;

    let inner = sample_ring(params.center, params.inner_radius, count, angle_at);
    let outer = sample_ring(params.center, params.outer_radius, count, angle_at);

    debug!(
        samples = count,
        snapped_end = rad_to_deg(angle_at(count - 1)),
        "Fixed-step tessellation of {}..{} degrees",
        params.start_angle,
        params.end_angle
    );

    Ok(PolygonArc::from_rings(params, inner, outer))
}

/// Final angle after rounding `end` up to a whole number of steps, in radians.
pub fn snapped_end_angle(start: f64, end: f64, step: f64, origin: SnapOrigin) -> f64 {
    match origin {
        SnapOrigin::StartAngle => start + segment_count(end - start, step) as f64 * step,
        SnapOrigin::Absolute => segment_count(end, step) as f64 * step,
    }
}

/// Number of `step` segments walked from `start` towards the snapped end.
fn snapped_segments(start: f64, end: f64, step: f64, origin: SnapOrigin) -> u64 {
    match origin {
        SnapOrigin::StartAngle => segment_count(end - start, step),
        SnapOrigin::Absolute => {
            let snapped_end = snapped_end_angle(start, end, step, origin);
            whole_steps(snapped_end - start, step)
        }
    }
}
