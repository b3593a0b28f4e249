//! SVG and JSON output for tessellated arcs

use anyhow::{Context, Result};
use arcslice_settings::{CanvasSettings, FillMode};
use arcslice_tessellator::PolygonArc;
use std::fmt::Write as _;
use std::path::Path;

const POLYGON_STYLE: &str = "fill:#ff0000;stroke:none";

/// Render the arc as a standalone SVG document sized to the canvas.
pub fn to_svg(arc: &PolygonArc, canvas: &CanvasSettings, fill_mode: FillMode) -> String {
    let mut points = String::new();
    for (i, p) in arc.points().iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let _ = write!(points, "{:.3},{:.3}", p.x, p.y);
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">
"#,
        w = canvas.width,
        h = canvas.height
    ));
    svg.push_str(&format!(
        r#"<polygon points="{}" fill-rule="{}" style="{}" />"#,
        points,
        fill_mode.svg_fill_rule(),
        POLYGON_STYLE
    ));
    svg.push_str("\n</svg>\n");
    svg
}

/// Pretty printed JSON form of the arc and its vertices.
pub fn to_json(arc: &PolygonArc) -> Result<String> {
    serde_json::to_string_pretty(arc).context("Failed to serialize polygon")
}

pub fn write_svg(
    path: &Path,
    arc: &PolygonArc,
    canvas: &CanvasSettings,
    fill_mode: FillMode,
) -> Result<()> {
    std::fs::write(path, to_svg(arc, canvas, fill_mode))
        .with_context(|| format!("Failed to write SVG to {}", path.display()))
}

pub fn write_json(path: &Path, arc: &PolygonArc) -> Result<()> {
    let json = to_json(arc)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))
}
