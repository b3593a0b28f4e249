use arcslice_tessellator::{
    tessellate, tessellate_fixed_step, ArcParams, Point2D, SamplingMode, SnapOrigin,
    TessellationOptions,
};

const TOLERANCE: f64 = 1e-2;

fn assert_points(actual: &[Point2D], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            a.approx_eq(&Point2D::new(e.0, e.1), TOLERANCE),
            "expected {:?}, got {}",
            e,
            a
        );
    }
}

#[test]
fn test_quarter_ring_with_45_degree_step() {
    let arc = tessellate_fixed_step(Point2D::new(0.0, 0.0), 0.0, 90.0, 10.0, 20.0, 45.0).unwrap();

    assert_eq!(arc.len(), 6);
    assert_points(
        arc.points(),
        &[
            (10.0, 0.0),
            (7.07, -7.07),
            (0.0, -10.0),
            (0.0, -20.0),
            (14.14, -14.14),
            (20.0, 0.0),
        ],
    );
}

#[test]
fn test_center_offset_applies_to_every_point() {
    let origin = tessellate_fixed_step(Point2D::new(0.0, 0.0), 0.0, 90.0, 10.0, 20.0, 45.0).unwrap();
    let shifted =
        tessellate_fixed_step(Point2D::new(200.0, 150.0), 0.0, 90.0, 10.0, 20.0, 45.0).unwrap();

    for (a, b) in origin.points().iter().zip(shifted.points()) {
        assert!(a.offset(200.0, 150.0).approx_eq(b, 1e-9));
    }
}

#[test]
fn test_uneven_step_extends_past_end() {
    // 0..100 with a 45 degree step snaps to 135.
    let arc = tessellate_fixed_step(Point2D::new(0.0, 0.0), 0.0, 100.0, 10.0, 20.0, 45.0).unwrap();
    assert_eq!(arc.inner_ring().len(), 4);

    let last = arc.inner_ring()[3];
    let expected = Point2D::new(10.0 * 135f64.to_radians().cos(), -10.0 * 135f64.to_radians().sin());
    assert!(last.approx_eq(&expected, 1e-9));
}

#[test]
fn test_full_circle_default_step() {
    let arc = tessellate_fixed_step(Point2D::new(0.0, 0.0), 0.0, 360.0, 25.0, 75.0, 5.0).unwrap();
    assert_eq!(arc.inner_ring().len(), 73);
    assert_eq!(arc.outer_ring_reversed().len(), 73);
    assert!(arc.inner_ring()[0].approx_eq(&arc.inner_ring()[72], 1e-9));
}

#[test]
fn test_dispatch_matches_direct_call() {
    let params = ArcParams::new(Point2D::new(5.0, 5.0), 45.0, 135.0, 25.0, 75.0);
    let via_dispatch = tessellate(
        &params,
        SamplingMode::FixedStep { step: 5.0 },
        &TessellationOptions::default(),
    )
    .unwrap();
    let direct = tessellate_fixed_step(Point2D::new(5.0, 5.0), 45.0, 135.0, 25.0, 75.0, 5.0).unwrap();
    assert_eq!(via_dispatch, direct);
}

#[test]
fn test_snap_origins_agree_when_start_is_aligned() {
    let params = ArcParams::new(Point2D::new(0.0, 0.0), 90.0, 200.0, 5.0, 10.0);
    let mode = SamplingMode::FixedStep { step: 30.0 };
    let relative = tessellate(&params, mode, &TessellationOptions::default()).unwrap();
    let absolute = tessellate(
        &params,
        mode,
        &TessellationOptions::default().with_snap_origin(SnapOrigin::Absolute),
    )
    .unwrap();
    assert_eq!(relative, absolute);
}
