//! ArcSlice CLI
//!
//! Usage:
//!   arcslice render --svg arc.svg
//!   arcslice render --config arc.toml --mode fixed-step --step 10 --json arc.json
//!   arcslice init-config [PATH]

use anyhow::{bail, Context, Result};
use arcslice::export;
use arcslice::{init_logging, ArcController, CircleMode, Config, FillMode};
use arcslice_settings::default_config_path;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

/// Tessellate arc slices into closed polygons
#[derive(Parser, Debug)]
#[command(name = "arcslice")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tessellate the configured arc and export it
    Render(RenderArgs),

    /// Write a configuration file populated with defaults
    InitConfig {
        /// Destination file (.toml or .json)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Configuration file (TOML or JSON); the user config is used when present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vertex calculation mode (adaptive, fixed-step)
    #[arg(long)]
    mode: Option<CircleMode>,

    /// Starting angle in degrees
    #[arg(long, value_name = "DEGREES")]
    start: Option<f64>,

    /// Final angle in degrees
    #[arg(long, value_name = "DEGREES")]
    end: Option<f64>,

    /// Inner radius
    #[arg(long)]
    inner: Option<f64>,

    /// Outer radius
    #[arg(long)]
    outer: Option<f64>,

    /// Maximum distance between consecutive vertices (adaptive mode)
    #[arg(long)]
    max_distance: Option<f64>,

    /// Angular step in degrees (fixed-step mode)
    #[arg(long, value_name = "DEGREES")]
    step: Option<f64>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Fill rule (even-odd, nonzero)
    #[arg(long)]
    fill_rule: Option<FillMode>,

    /// Write the polygon as SVG
    #[arg(long, value_name = "OUT")]
    svg: Option<PathBuf>,

    /// Write the polygon as JSON
    #[arg(long, value_name = "OUT")]
    json: Option<PathBuf>,
}

impl RenderArgs {
    fn apply(&self, config: &mut Config) {
        let arc = &mut config.arc;
        if let Some(mode) = self.mode {
            arc.circle_mode = mode;
        }
        if let Some(start) = self.start {
            arc.starting_angle = start;
        }
        if let Some(end) = self.end {
            arc.final_angle = end;
        }
        if let Some(inner) = self.inner {
            arc.inner_radius = inner;
        }
        if let Some(outer) = self.outer {
            arc.outer_radius = outer;
        }
        if let Some(max_distance) = self.max_distance {
            arc.max_distance = max_distance;
        }
        if let Some(step) = self.step {
            arc.step = step;
        }
        if let Some(fill_rule) = self.fill_rule {
            arc.fill_mode = fill_rule;
        }
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Render(args) => render(&args),
        Commands::InitConfig { path, force } => init_config(path, force),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Ok(path) if path.exists() => {
            debug!("Using user config {}", path.display());
            Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        _ => Ok(Config::default()),
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    if config.canvas.width == 0 || config.canvas.height == 0 {
        bail!("Canvas dimensions must be > 0");
    }

    let controller = ArcController::new(config);
    println!("{}", controller.status());

    let Some(arc) = controller.arc() else {
        bail!("No polygon produced");
    };
    info!(
        vertices = arc.len(),
        renderable = arc.is_renderable(),
        "Tessellated arc"
    );

    let config = controller.config();
    if let Some(path) = &args.svg {
        export::write_svg(path, arc, &config.canvas, config.arc.fill_mode)?;
        info!("Wrote SVG to {}", path.display());
    }
    if let Some(path) = &args.json {
        export::write_json(path, arc)?;
        info!("Wrote JSON to {}", path.display());
    }
    if args.svg.is_none() && args.json.is_none() {
        println!("{}", export::to_json(arc)?);
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path().context("Cannot determine config location")?,
    };
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());
    println!("{}", path.display());
    Ok(())
}
