use arcslice_core::Point2D;
use arcslice_settings::{ArcController, CircleMode, Config, SettingsError};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_initial_build_uses_canvas_center() {
    let controller = ArcController::new(Config::default());
    let arc = controller.arc().expect("default config builds");
    assert_eq!(arc.center(), Point2D::new(200.0, 200.0));
    assert!(arc.is_renderable());
}

#[test]
fn test_property_change_rebuilds_and_notifies() {
    let mut controller = ArcController::new(Config::default());
    let rebuilds = Rc::new(Cell::new(0));
    let counter = Rc::clone(&rebuilds);
    controller.on_arc_rebuilt(move |_| counter.set(counter.get() + 1));

    let before = controller.arc().map(|a| a.len());
    assert!(controller.set_property("outer_radius", "150").unwrap());
    let after = controller.arc().map(|a| a.len());

    assert_eq!(rebuilds.get(), 1);
    assert!(after > before);
}

#[test]
fn test_invalid_arc_keeps_previous_polygon() {
    let mut controller = ArcController::new(Config::default());
    let previous = controller.arc().cloned();

    assert!(!controller.set_property("inner_radius", "500").unwrap());
    assert_eq!(controller.arc().cloned(), previous);
    assert!(controller
        .status()
        .ends_with("ERROR: inner radius is bigger than outer radius."));

    assert!(controller.set_property("inner_radius", "25").unwrap());
    assert!(controller.status().contains("SUCCESS"));
}

#[test]
fn test_inverted_angles_reported() {
    let mut controller = ArcController::new(Config::default());
    assert!(!controller.set_property("starting_angle", "200").unwrap());
    assert!(controller
        .status()
        .ends_with("ERROR: starting angle is bigger than final angle."));
}

#[test]
fn test_out_of_range_angle_reported_by_tessellator() {
    let mut controller = ArcController::new(Config::default());
    assert!(!controller.set_property("final_angle", "400").unwrap());
    assert!(controller.status().contains("ERROR: Invalid parameter"));
}

#[test]
fn test_unparsable_value_is_an_error() {
    let mut controller = ArcController::new(Config::default());
    let err = controller.set_property("step", "five").unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    assert!(controller.status().contains("ERROR: Invalid setting 'step'"));
}

#[test]
fn test_fixed_step_mode_matches_ring_lengths() {
    let mut controller = ArcController::new(Config::default());
    controller.set_property("circle_mode", "fixed-step").unwrap();
    assert_eq!(controller.config().arc.circle_mode, CircleMode::FixedStep);

    let arc = controller.arc().unwrap();
    assert_eq!(arc.inner_ring().len(), arc.outer_ring_reversed().len());
    // 45..135 in 5 degree steps
    assert_eq!(arc.inner_ring().len(), 19);
}

#[test]
fn test_resize_moves_center() {
    let mut controller = ArcController::new(Config::default());
    assert!(controller.resize(801, 600).unwrap());
    assert_eq!(controller.arc().unwrap().center(), Point2D::new(400.0, 300.0));
    assert!(controller.resize(0, 600).is_err());
}

#[test]
fn test_unknown_property_lists_valid_names() {
    let mut controller = ArcController::new(Config::default());
    let err = controller.set_property("radius", "10").unwrap_err();
    assert!(matches!(err, SettingsError::UnknownProperty(_)));
    assert!(controller.status().contains("ERROR: Unknown property: radius"));
    assert!(controller.status().contains("circle_mode"));
}
