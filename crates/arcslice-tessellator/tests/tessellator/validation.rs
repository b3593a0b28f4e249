use arcslice_tessellator::{
    tessellate, tessellate_adaptive, tessellate_fixed_step, ArcParams, ParameterError, Point2D,
    SamplingMode, TessellationError, TessellationOptions,
};

fn origin() -> Point2D {
    Point2D::new(0.0, 0.0)
}

#[test]
fn test_start_angle_above_range() {
    let err = tessellate_adaptive(origin(), 370.0, 370.0, 10.0, 20.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        TessellationError::InvalidParameter(ParameterError::AngleOutOfRange {
            name: "start_angle",
            value: 370.0
        })
    );
}

#[test]
fn test_end_angle_361_rejected_360_accepted() {
    assert!(matches!(
        tessellate_adaptive(origin(), 0.0, 361.0, 10.0, 20.0, 1.0),
        Err(TessellationError::InvalidParameter(
            ParameterError::AngleOutOfRange { name: "end_angle", .. }
        ))
    ));
    assert!(tessellate_adaptive(origin(), 0.0, 360.0, 10.0, 20.0, 1.0).is_ok());
}

#[test]
fn test_inverted_angles() {
    for result in [
        tessellate_adaptive(origin(), 100.0, 50.0, 10.0, 20.0, 1.0),
        tessellate_fixed_step(origin(), 100.0, 50.0, 10.0, 20.0, 5.0),
    ] {
        assert!(matches!(
            result,
            Err(TessellationError::InvalidParameter(
                ParameterError::InvertedAngles { .. }
            ))
        ));
    }
}

#[test]
fn test_inverted_radii() {
    for result in [
        tessellate_adaptive(origin(), 0.0, 90.0, 50.0, 10.0, 1.0),
        tessellate_fixed_step(origin(), 0.0, 90.0, 50.0, 10.0, 5.0),
    ] {
        assert_eq!(
            result.unwrap_err(),
            TessellationError::InvalidParameter(ParameterError::InvertedRadii {
                inner: 50.0,
                outer: 10.0
            })
        );
    }
}

#[test]
fn test_validation_runs_before_step_checks() {
    // Both the angle and the step are bad; the angle is reported.
    let params = ArcParams::new(origin(), 400.0, 400.0, 1.0, 2.0);
    let err = tessellate(
        &params,
        SamplingMode::FixedStep { step: 0.0 },
        &TessellationOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TessellationError::InvalidParameter(ParameterError::AngleOutOfRange { .. })
    ));
}

#[test]
fn test_vanishing_step_hits_sample_limit() {
    let err = tessellate_adaptive(origin(), 0.0, 360.0, 1.0, 1e12, 1.0).unwrap_err();
    assert!(matches!(err, TessellationError::TooManySamples { .. }));

    let err = tessellate_fixed_step(origin(), 0.0, 360.0, 1.0, 2.0, 1e-9).unwrap_err();
    assert!(matches!(err, TessellationError::TooManySamples { .. }));
}
