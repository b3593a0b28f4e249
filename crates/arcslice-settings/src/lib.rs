//! ArcSlice Settings Crate
//!
//! Handles the arc configuration, its persistence, and the controller that
//! rebuilds the polygon whenever a property changes.

pub mod config;
pub mod controller;
pub mod error;

pub use config::{
    default_config_path, ArcProperties, CanvasSettings, CircleMode, Config, FillMode,
    LimitSettings,
};
pub use controller::{format_duration, ArcController};
pub use error::{SettingsError, SettingsResult};
