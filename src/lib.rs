//! # ArcSlice
//!
//! Tessellates annulus sectors ("arc slices") into closed polygon outlines
//! suitable for filled rendering.
//!
//! ## Architecture
//!
//! ArcSlice is organized as a workspace with multiple crates:
//!
//! 1. **arcslice-core** - Point type, angle conversions, error types
//! 2. **arcslice-tessellator** - Adaptive and fixed-step tessellation
//! 3. **arcslice-settings** - Arc properties, config files, live recompute controller
//! 4. **arcslice** - Command line binary with SVG and JSON export

pub mod export;

pub use arcslice_core::{ParameterError, Point2D, TessellationError};
pub use arcslice_settings::{
    ArcController, ArcProperties, CanvasSettings, CircleMode, Config, FillMode, LimitSettings,
    SettingsError,
};
pub use arcslice_tessellator::{
    tessellate, tessellate_adaptive, tessellate_fixed_step, ArcParams, PolygonArc, SamplingMode,
    SnapOrigin, TessellationOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Installs a console `fmt` layer. Directives in `RUST_LOG` take precedence;
/// without them the level is `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(rust_log.as_deref(), verbose)
        .with_context(|| format!("Invalid {} directives", EnvFilter::DEFAULT_ENV))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn log_filter(
    rust_log: Option<&str>,
    verbose: bool,
) -> std::result::Result<tracing_subscriber::EnvFilter, tracing_subscriber::filter::ParseError> {
    use tracing_subscriber::EnvFilter;

    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(EnvFilter::new(if verbose { "debug" } else { "info" })),
    }
}
