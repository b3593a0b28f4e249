//! # ArcSlice Core
//!
//! Core types and utilities shared by the ArcSlice crates.
//! Provides the 2D point type, angle unit conversions and the
//! error hierarchy used by the tessellator and the settings layer.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{ParameterError, TessellationError};
pub use geometry::Point2D;
pub use units::{deg_to_rad, rad_to_deg, FULL_TURN_DEGREES};
