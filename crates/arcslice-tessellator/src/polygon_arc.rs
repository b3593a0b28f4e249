//! Tessellation output: the closed outline of an annulus sector.

use crate::params::ArcParams;
use arcslice_core::Point2D;
use serde::Serialize;

/// Area below which a polygon is considered degenerate.
const DEGENERATE_AREA: f64 = 1e-12;

/// Closed polygon outlining an annulus sector.
///
/// `points` walks forward along the inner ring, then backward along the
/// outer ring. The first `inner_len` points belong to the inner ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonArc {
    center: Point2D,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    inner_len: usize,
    points: Vec<Point2D>,
}

impl PolygonArc {
    /// Join the rings: inner in sampling order, then outer reversed.
    pub(crate) fn from_rings(
        params: &ArcParams,
        mut inner: Vec<Point2D>,
        mut outer: Vec<Point2D>,
    ) -> Self {
        let inner_len = inner.len();
        outer.reverse();
        inner.append(&mut outer);
        Self {
            center: params.center,
            start_angle: params.start_angle,
            end_angle: params.end_angle,
            inner_radius: params.inner_radius,
            outer_radius: params.outer_radius,
            inner_len,
            points: inner,
        }
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// All vertices in drawing order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Inner ring vertices, from the starting angle to the final angle.
    pub fn inner_ring(&self) -> &[Point2D] {
        &self.points[..self.inner_len]
    }

    /// Outer ring vertices, from the final angle back to the starting angle.
    pub fn outer_ring_reversed(&self) -> &[Point2D] {
        &self.points[self.inner_len..]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    /// Shoelace area of the closed polygon. Positive when the vertices run
    /// counter-clockwise in y-up coordinates.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area / 2.0
    }

    /// False when the outline encloses no area, e.g. a zero-degree span or
    /// equal radii. Such a result should be skipped or drawn as a line.
    pub fn is_renderable(&self) -> bool {
        self.signed_area().abs() > DEGENERATE_AREA
    }
}
