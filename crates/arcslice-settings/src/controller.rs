//! Arc Controller
//!
//! Owns the current configuration and the last tessellated polygon. Every
//! property change or canvas resize recomputes the polygon; failures keep the
//! previous polygon and surface an error in the status line.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use arcslice_tessellator::{tessellate, PolygonArc};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Controller for the live arc preview
pub struct ArcController {
    config: Config,
    arc: Option<PolygonArc>,
    status: String,
    listeners: Vec<Box<dyn Fn(&PolygonArc)>>,
}

impl ArcController {
    /// Create a controller and build the initial polygon
    pub fn new(config: Config) -> Self {
        let mut controller = Self {
            config,
            arc: None,
            status: String::new(),
            listeners: Vec::new(),
        };
        controller.rebuild();
        controller
    }

    /// Register a callback invoked after every successful rebuild
    pub fn on_arc_rebuilt<F>(&mut self, callback: F)
    where
        F: Fn(&PolygonArc) + 'static,
    {
        self.listeners.push(Box::new(callback));
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Last successfully built polygon
    pub fn arc(&self) -> Option<&PolygonArc> {
        self.arc.as_ref()
    }

    /// Status line describing the last rebuild
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Update a named arc property and rebuild.
    ///
    /// Returns an error only when the value cannot be applied; an arc that
    /// fails to tessellate is reported through [`ArcController::status`].
    pub fn set_property(&mut self, name: &str, value: &str) -> SettingsResult<bool> {
        if let Err(e) = self.config.arc.set(name, value) {
            warn!("Rejected property {} = {:?}: {}", name, value, e);
            self.set_status(&format!("ERROR: {}", e));
            return Err(e);
        }
        Ok(self.rebuild())
    }

    /// Change the canvas size and rebuild around the new center
    pub fn resize(&mut self, width: u32, height: u32) -> SettingsResult<bool> {
        if width == 0 || height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "canvas".to_string(),
                reason: "dimensions must be > 0".to_string(),
            });
        }
        self.config.canvas.width = width;
        self.config.canvas.height = height;
        Ok(self.rebuild())
    }

    /// Recompute the polygon from the current configuration.
    ///
    /// Returns `true` when a new polygon replaced the previous one.
    pub fn rebuild(&mut self) -> bool {
        let arc = &self.config.arc;
        let rejected = if arc.starting_angle > arc.final_angle {
            Some("ERROR: starting angle is bigger than final angle.")
        } else if arc.inner_radius > arc.outer_radius {
            Some("ERROR: inner radius is bigger than outer radius.")
        } else {
            None
        };
        if let Some(message) = rejected {
            self.set_status(message);
            return false;
        }

        let arc = &self.config.arc;
        let params = arc.params(self.config.canvas.center());
        let mode = arc.sampling_mode();
        let options = self.config.limits.options();

        let started = Instant::now();
        match tessellate(&params, mode, &options) {
            Ok(polygon) => {
                let elapsed = started.elapsed();
                debug!(vertices = polygon.len(), ?mode, "Rebuilt arc");
                for listener in &self.listeners {
                    listener(&polygon);
                }
                self.arc = Some(polygon);
                self.set_status(&format!(
                    "SUCCESS: Rebuilt arc in {}.",
                    format_duration(elapsed)
                ));
                true
            }
            Err(e) => {
                warn!("Arc rebuild failed: {}", e);
                self.set_status(&format!("ERROR: {}", e));
                false
            }
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.6f"), message);
    }
}

/// Human readable duration using the largest fitting unit
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
