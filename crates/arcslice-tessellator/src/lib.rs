//! # ArcSlice Tessellator
//!
//! Converts an annulus sector (an "arc slice" bounded by an inner and outer
//! radius and a start/end angle) into the vertex list of a closed polygon,
//! ready for a polygon-fill renderer.
//!
//! ## Sampling modes
//!
//! - **Adaptive**: every ring gets its own angular step, derived from a maximum
//!   arc length between consecutive vertices. Larger radii get more vertices.
//! - **Fixed step**: one angular step shared by both rings, so inner and outer
//!   vertices line up radially and the rings have the same length.
//!
//! ## Output layout
//!
//! ```text
//! inner[0] -> inner[1] -> ... -> inner[n]      (start angle to final angle)
//!     outer[m] -> ... -> outer[1] -> outer[0]  (final angle back to start)
//! ```
//!
//! Walking forward along the inner arc and backward along the outer arc
//! gives an outline that never crosses itself.
//!
//! ## Usage
//!
//! ```rust
//! use arcslice_core::Point2D;
//! use arcslice_tessellator::tessellate_fixed_step;
//!
//! let arc = tessellate_fixed_step(Point2D::new(0.0, 0.0), 0.0, 90.0, 10.0, 20.0, 45.0)?;
//! assert_eq!(arc.len(), 6);
//! # Ok::<(), arcslice_core::TessellationError>(())
//! ```

pub mod adaptive;
pub mod fixed_step;
pub mod params;
pub mod polygon_arc;
pub mod ring;
pub mod step;

pub use arcslice_core::{ParameterError, Point2D, TessellationError};
pub use params::{ArcParams, SamplingMode, SnapOrigin, TessellationOptions};
pub use polygon_arc::PolygonArc;

/// Tessellate `params` with the given sampling mode and options.
pub fn tessellate(
    params: &ArcParams,
    mode: SamplingMode,
    options: &TessellationOptions,
) -> Result<PolygonArc, TessellationError> {
    match mode {
        SamplingMode::Adaptive { max_distance } => {
            adaptive::tessellate(params, max_distance, options)
        }
        SamplingMode::FixedStep { step } => fixed_step::tessellate(params, step, options),
    }
}

/// Adaptive tessellation with default options.
///
/// `max_distance` bounds the arc length between consecutive vertices on each
/// ring; it is given in degrees like the angles. The usual default is `1.0`.
pub fn tessellate_adaptive(
    center: Point2D,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    max_distance: f64,
) -> Result<PolygonArc, TessellationError> {
    let params = ArcParams::new(center, start_angle, end_angle, inner_radius, outer_radius);
    adaptive::tessellate(&params, max_distance, &TessellationOptions::default())
}

/// Fixed-step tessellation with default options.
///
/// `step` is the angular increment in degrees; the usual default is `5.0`.
pub fn tessellate_fixed_step(
    center: Point2D,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    step: f64,
) -> Result<PolygonArc, TessellationError> {
    let params = ArcParams::new(center, start_angle, end_angle, inner_radius, outer_radius);
    fixed_step::tessellate(&params, step, &TessellationOptions::default())
}
