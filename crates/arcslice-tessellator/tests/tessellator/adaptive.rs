use arcslice_tessellator::{tessellate_adaptive, Point2D};

#[test]
fn test_outer_ring_gets_more_vertices() {
    let arc = tessellate_adaptive(Point2D::new(200.0, 200.0), 45.0, 135.0, 25.0, 75.0, 1.0).unwrap();

    let inner = arc.inner_ring().len();
    let outer = arc.outer_ring_reversed().len();
    assert!(outer > inner, "outer {} should exceed inner {}", outer, inner);
    assert_eq!(arc.len(), inner + outer);
    assert!(arc.is_renderable());
}

#[test]
fn test_rings_start_and_end_on_requested_angles() {
    let center = Point2D::new(0.0, 0.0);
    let arc = tessellate_adaptive(center, 30.0, 120.0, 10.0, 20.0, 1.0).unwrap();

    let on_ring = |radius: f64, degrees: f64| {
        let rad = degrees.to_radians();
        Point2D::new(radius * rad.cos(), -radius * rad.sin())
    };

    let inner = arc.inner_ring();
    assert!(inner[0].approx_eq(&on_ring(10.0, 30.0), 1e-9));
    assert!(inner[inner.len() - 1].approx_eq(&on_ring(10.0, 120.0), 1e-9));

    let outer = arc.outer_ring_reversed();
    assert!(outer[0].approx_eq(&on_ring(20.0, 120.0), 1e-9));
    assert!(outer[outer.len() - 1].approx_eq(&on_ring(20.0, 30.0), 1e-9));
}

#[test]
fn test_pie_slice_when_inner_radius_is_zero() {
    let center = Point2D::new(12.0, -3.0);
    let arc = tessellate_adaptive(center, 0.0, 90.0, 0.0, 40.0, 1.0).unwrap();

    assert_eq!(arc.inner_ring(), &[center]);
    assert!(arc.is_renderable());
}

#[test]
fn test_all_radii_zero_is_degenerate() {
    let center = Point2D::new(1.0, 1.0);
    let arc = tessellate_adaptive(center, 0.0, 90.0, 0.0, 0.0, 1.0).unwrap();
    assert_eq!(arc.points(), &[center, center]);
    assert!(!arc.is_renderable());
}

#[test]
fn test_segments_respect_distance_bound() {
    let max_distance: f64 = 2.0;
    let bound = max_distance.to_radians();
    let arc = tessellate_adaptive(Point2D::new(0.0, 0.0), 0.0, 360.0, 5.0, 50.0, max_distance)
        .unwrap();

    for ring in [arc.inner_ring(), arc.outer_ring_reversed()] {
        for pair in ring.windows(2) {
            // Chords are never longer than their arcs.
            assert!(pair[0].distance_to(&pair[1]) <= bound + 1e-9);
        }
    }
}

#[test]
fn test_large_full_circle_fits_default_limit() {
    let arc = tessellate_adaptive(Point2D::new(400.0, 400.0), 0.0, 360.0, 100.0, 300.0, 1.0)
        .unwrap();
    // 360 * radius segments per ring at a one-degree distance.
    assert_eq!(arc.inner_ring().len(), 36_001);
    assert_eq!(arc.outer_ring_reversed().len(), 108_001);
}

#[test]
fn test_smaller_distance_means_more_vertices() {
    let coarse = tessellate_adaptive(Point2D::new(0.0, 0.0), 0.0, 180.0, 10.0, 30.0, 2.0).unwrap();
    let fine = tessellate_adaptive(Point2D::new(0.0, 0.0), 0.0, 180.0, 10.0, 30.0, 0.5).unwrap();
    assert!(fine.len() > coarse.len());
}

#[test]
fn test_json_export_shape() {
    let arc = tessellate_adaptive(Point2D::new(0.0, 0.0), 0.0, 0.0, 1.0, 2.0, 1.0).unwrap();
    let json = serde_json::to_value(&arc).unwrap();
    assert_eq!(json["inner_len"], 1);
    assert_eq!(json["points"].as_array().map(|p| p.len()), Some(2));
    assert_eq!(json["points"][0]["x"], 1.0);
}
