//! Arc parameters, sampling modes and tessellation options.

use arcslice_core::{ParameterError, Point2D, FULL_TURN_DEGREES};
use serde::{Deserialize, Serialize};

/// Geometry of an annulus sector.
///
/// Angles are in degrees, measured counter-clockwise on screen from the
/// positive x axis. Radii share the unit of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    pub center: Point2D,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcParams {
    pub fn new(
        center: Point2D,
        start_angle: f64,
        end_angle: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Self {
        Self {
            center,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
        }
    }

    /// Angular extent in degrees.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Check the parameter invariants.
    ///
    /// Both angles must lie in `[0, 360]` with `start_angle <= end_angle`,
    /// radii must be non-negative with `inner_radius <= outer_radius`.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_finite("center.x", self.center.x)?;
        ensure_finite("center.y", self.center.y)?;
        ensure_finite("start_angle", self.start_angle)?;
        ensure_finite("end_angle", self.end_angle)?;
        ensure_finite("inner_radius", self.inner_radius)?;
        ensure_finite("outer_radius", self.outer_radius)?;

        ensure_angle_in_range("start_angle", self.start_angle)?;
        ensure_angle_in_range("end_angle", self.end_angle)?;
        if self.end_angle < self.start_angle {
            return Err(ParameterError::InvertedAngles {
                start: self.start_angle,
                end: self.end_angle,
            });
        }

        if self.inner_radius < 0.0 {
            return Err(ParameterError::NegativeRadius {
                name: "inner_radius",
                value: self.inner_radius,
            });
        }
        if self.outer_radius < 0.0 {
            return Err(ParameterError::NegativeRadius {
                name: "outer_radius",
                value: self.outer_radius,
            });
        }
        if self.inner_radius > self.outer_radius {
            return Err(ParameterError::InvertedRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }

        Ok(())
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name })
    }
}

fn ensure_angle_in_range(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if (0.0..=FULL_TURN_DEGREES).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::AngleOutOfRange { name, value })
    }
}

/// Validate a sampling step or distance: finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(ParameterError::NonPositiveStep { name, value });
    }
    Ok(())
}

/// How the arc is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SamplingMode {
    /// Each ring gets its own step so that no segment's arc length exceeds
    /// `max_distance` (given in degrees, converted like the angles).
    Adaptive { max_distance: f64 },
    /// Both rings share one angular step in degrees.
    FixedStep { step: f64 },
}

impl SamplingMode {
    pub const DEFAULT_MAX_DISTANCE: f64 = 1.0;
    pub const DEFAULT_STEP: f64 = 5.0;

    pub fn adaptive() -> Self {
        Self::Adaptive {
            max_distance: Self::DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn fixed_step() -> Self {
        Self::FixedStep {
            step: Self::DEFAULT_STEP,
        }
    }
}

impl Default for SamplingMode {
    fn default() -> Self {
        Self::adaptive()
    }
}

/// Reference angle used to round the fixed-step end angle up to a whole
/// number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapOrigin {
    /// Steps are counted from the starting angle; the last sample always
    /// lands on or past the final angle.
    #[default]
    StartAngle,
    /// Steps are counted from angle zero. When the starting angle is not a
    /// multiple of the step the last sample can fall short of the final angle.
    Absolute,
}

/// Limits and policy knobs shared by both tessellation modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TessellationOptions {
    /// Upper bound on the samples emitted for a single ring.
    pub max_samples_per_ring: usize,
    /// Fixed-step end angle snapping.
    pub snap_origin: SnapOrigin,
}

impl TessellationOptions {
    /// Room for a full turn at radius 25 000 with a one-degree distance.
    pub const DEFAULT_MAX_SAMPLES_PER_RING: usize = 10_000_000;

    pub fn with_max_samples(mut self, max_samples_per_ring: usize) -> Self {
        self.max_samples_per_ring = max_samples_per_ring;
        self
    }

    pub fn with_snap_origin(mut self, snap_origin: SnapOrigin) -> Self {
        self.snap_origin = snap_origin;
        self
    }
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            max_samples_per_ring: Self::DEFAULT_MAX_SAMPLES_PER_RING,
            snap_origin: SnapOrigin::default(),
        }
    }
}
