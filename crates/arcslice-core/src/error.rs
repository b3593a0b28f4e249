//! Error handling for ArcSlice
//!
//! Provides the error types of the tessellation layer:
//! - Parameter errors (arc parameter validation)
//! - Tessellation errors (vertex generation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Arc parameter validation error
///
/// Every variant is an "invalid parameter" condition detected before any
/// trigonometric work is done.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// An angle lies outside `[0, 360]`
    #[error("Angle '{name}' out of range: {value} (valid: 0..360)")]
    AngleOutOfRange {
        /// The parameter name.
        name: &'static str,
        /// The rejected angle in degrees.
        value: f64,
    },

    /// The final angle is lower than the starting angle
    #[error("Starting angle {start} must be lower than or equal to the final angle {end}")]
    InvertedAngles {
        /// The starting angle in degrees.
        start: f64,
        /// The final angle in degrees.
        end: f64,
    },

    /// The inner radius is larger than the outer radius
    #[error("Inner radius {inner} must be smaller than or equal to the outer radius {outer}")]
    InvertedRadii {
        /// The inner radius.
        inner: f64,
        /// The outer radius.
        outer: f64,
    },

    /// A radius is negative
    #[error("Radius '{name}' must be non-negative, got {value}")]
    NegativeRadius {
        /// The parameter name.
        name: &'static str,
        /// The rejected radius.
        value: f64,
    },

    /// A value is NaN or infinite
    #[error("Parameter '{name}' must be a finite number")]
    NonFinite {
        /// The parameter name.
        name: &'static str,
    },

    /// A sampling step or distance is zero or negative
    #[error("Parameter '{name}' must be greater than zero, got {value}")]
    NonPositiveStep {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Tessellation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TessellationError {
    /// The arc parameters were rejected
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// A ring would need more samples than the configured limit
    #[error("Ring needs {requested} samples, exceeding the limit of {limit}")]
    TooManySamples {
        /// Samples the ring would need.
        requested: u64,
        /// Configured maximum samples per ring.
        limit: usize,
    },
}
