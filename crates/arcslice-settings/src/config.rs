//! Configuration and settings management for ArcSlice
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Arc properties (radii, angles, sampling and fill options)
//! - Canvas size (the arc is centered on the canvas)
//! - Tessellation limits

use crate::error::{SettingsError, SettingsResult};
use arcslice_core::Point2D;
use arcslice_tessellator::{ArcParams, SamplingMode, SnapOrigin, TessellationOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Vertex calculation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleMode {
    /// Both rings share a fixed angular step
    FixedStep,
    /// Each ring is sampled so vertices are at most `max_distance` apart
    #[default]
    MaxDistance,
}

impl fmt::Display for CircleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedStep => write!(f, "fixed-step"),
            Self::MaxDistance => write!(f, "max-distance"),
        }
    }
}

impl FromStr for CircleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fixed-step" | "fixed" => Ok(Self::FixedStep),
            "max-distance" | "adaptive" => Ok(Self::MaxDistance),
            _ => Err(format!("Unknown circle mode: {}", s)),
        }
    }
}

/// Polygon fill rule handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Even-odd rule
    #[default]
    Alternate,
    /// Nonzero winding rule
    Winding,
}

impl FillMode {
    /// Value of the SVG `fill-rule` attribute
    pub fn svg_fill_rule(&self) -> &'static str {
        match self {
            Self::Alternate => "evenodd",
            Self::Winding => "nonzero",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alternate => write!(f, "even-odd"),
            Self::Winding => write!(f, "nonzero"),
        }
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "even-odd" | "evenodd" | "alternate" => Ok(Self::Alternate),
            "nonzero" | "non-zero" | "winding" => Ok(Self::Winding),
            _ => Err(format!("Unknown fill mode: {}", s)),
        }
    }
}

/// Editable arc properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcProperties {
    /// Radius of the empty inner circle
    pub inner_radius: f64,
    /// Radius of the filled outer circle
    pub outer_radius: f64,
    /// Angle at which the arc starts, in degrees
    pub starting_angle: f64,
    /// Angle at which the arc ends, in degrees
    pub final_angle: f64,
    /// Fill rule used when rendering the polygon
    pub fill_mode: FillMode,
    /// Maximum distance between consecutive vertices (max-distance mode)
    pub max_distance: f64,
    /// Angular step in degrees (fixed-step mode)
    pub step: f64,
    /// Mode used to calculate the vertices
    pub circle_mode: CircleMode,
}

impl Default for ArcProperties {
    fn default() -> Self {
        Self {
            inner_radius: 25.0,
            outer_radius: 75.0,
            starting_angle: 45.0,
            final_angle: 135.0,
            fill_mode: FillMode::default(),
            max_distance: SamplingMode::DEFAULT_MAX_DISTANCE,
            step: SamplingMode::DEFAULT_STEP,
            circle_mode: CircleMode::default(),
        }
    }
}

impl ArcProperties {
    /// Names accepted by [`ArcProperties::set`].
    pub const PROPERTY_NAMES: [&'static str; 8] = [
        "inner_radius",
        "outer_radius",
        "starting_angle",
        "final_angle",
        "fill_mode",
        "max_distance",
        "step",
        "circle_mode",
    ];

    /// Arc geometry centered on `center`
    pub fn params(&self, center: Point2D) -> ArcParams {
        ArcParams::new(
            center,
            self.starting_angle,
            self.final_angle,
            self.inner_radius,
            self.outer_radius,
        )
    }

    /// Sampling mode selected by `circle_mode`
    pub fn sampling_mode(&self) -> SamplingMode {
        match self.circle_mode {
            CircleMode::MaxDistance => SamplingMode::Adaptive {
                max_distance: self.max_distance,
            },
            CircleMode::FixedStep => SamplingMode::FixedStep { step: self.step },
        }
    }

    /// Set a property from its textual value
    pub fn set(&mut self, name: &str, value: &str) -> SettingsResult<()> {
        match name {
            "inner_radius" => self.inner_radius = parse_number(name, value)?,
            "outer_radius" => self.outer_radius = parse_number(name, value)?,
            "starting_angle" => self.starting_angle = parse_number(name, value)?,
            "final_angle" => self.final_angle = parse_number(name, value)?,
            "max_distance" => self.max_distance = parse_number(name, value)?,
            "step" => self.step = parse_number(name, value)?,
            "fill_mode" => self.fill_mode = parse_enum(name, value)?,
            "circle_mode" => self.circle_mode = parse_enum(name, value)?,
            _ => {
                return Err(SettingsError::UnknownProperty(format!(
                    "{} (expected one of: {})",
                    name,
                    Self::PROPERTY_NAMES.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Current textual value of a property
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match name {
            "inner_radius" => self.inner_radius.to_string(),
            "outer_radius" => self.outer_radius.to_string(),
            "starting_angle" => self.starting_angle.to_string(),
            "final_angle" => self.final_angle.to_string(),
            "max_distance" => self.max_distance.to_string(),
            "step" => self.step.to_string(),
            "fill_mode" => self.fill_mode.to_string(),
            "circle_mode" => self.circle_mode.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Validate the arc geometry and the sampling value of the active mode
    pub fn validate(&self) -> SettingsResult<()> {
        self.params(Point2D::ORIGIN).validate()?;

        let (key, value) = match self.circle_mode {
            CircleMode::MaxDistance => ("max_distance", self.max_distance),
            CircleMode::FixedStep => ("step", self.step),
        };
        if !(value.is_finite() && value > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: key.to_string(),
                reason: format!("must be greater than zero, got {}", value),
            });
        }
        Ok(())
    }
}

fn parse_number(name: &str, value: &str) -> SettingsResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| SettingsError::InvalidSetting {
            key: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_enum<T: FromStr<Err = String>>(name: &str, value: &str) -> SettingsResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|reason| SettingsError::InvalidSetting {
            key: name.to_string(),
            reason,
        })
}

/// Drawing surface settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

impl CanvasSettings {
    /// Center of the canvas, snapped to whole pixels
    pub fn center(&self) -> Point2D {
        Point2D::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

/// Tessellation limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    /// Maximum vertices per ring
    pub max_samples_per_ring: usize,
    /// Reference angle for fixed-step end angle snapping
    pub snap_origin: SnapOrigin,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_samples_per_ring: TessellationOptions::DEFAULT_MAX_SAMPLES_PER_RING,
            snap_origin: SnapOrigin::default(),
        }
    }
}

impl LimitSettings {
    pub fn options(&self) -> TessellationOptions {
        TessellationOptions::default()
            .with_max_samples(self.max_samples_per_ring)
            .with_snap_origin(self.snap_origin)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Arc properties
    pub arc: ArcProperties,
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Tessellation limits
    pub limits: LimitSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.arc.validate()?;

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "canvas".to_string(),
                reason: "dimensions must be > 0".to_string(),
            });
        }

        if self.limits.max_samples_per_ring == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "max_samples_per_ring".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Platform config file location, e.g. `~/.config/arcslice/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("arcslice").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}
