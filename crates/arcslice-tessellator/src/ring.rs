//! Sampling of a single ring.

use arcslice_core::Point2D;

/// Point on the circle of `radius` around `center` at `angle` radians.
///
/// The sine is negated because the y axis grows downward on screen, so
/// increasing angles run counter-clockwise as seen by the user.
#[inline]
pub fn polar_point(center: Point2D, radius: f64, angle: f64) -> Point2D {
    let (sin, cos) = angle.sin_cos();
    Point2D::new(center.x + cos * radius, center.y - sin * radius)
}

/// Sample `count` angles produced by `angle_at` on one ring.
///
/// A zero radius collapses every sample onto `center` without evaluating
/// any trigonometry.
pub(crate) fn sample_ring(
    center: Point2D,
    radius: f64,
    count: usize,
    angle_at: impl Fn(usize) -> f64,
) -> Vec<Point2D> {
    if radius == 0.0 {
        return vec![center; count];
    }
    (0..count)
        .map(|i| polar_point(center, radius, angle_at(i)))
        .collect()
}
