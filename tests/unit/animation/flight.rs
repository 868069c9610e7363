use super::*;

const RUN: Millis = Millis(2800);

#[test]
fn starts_offscreen_left_and_transparent() {
    let pose = RavenFlight::new().sample(Millis::ZERO, RUN);
    assert_eq!(pose.pose, TAKEOFF);
    assert_eq!(pose.opacity, 0.0);
}

#[test]
fn keyed_offsets_hit_exact_values() {
    let flight = RavenFlight::new();
    let glide = flight.sample(Millis(1456), RUN);
    assert!((glide.pose.translate.x - GLIDE.translate.x).abs() < 1e-9);
    assert!((glide.pose.scale - GLIDE.scale).abs() < 1e-9);

    let fully_visible = flight.sample(Millis(560), RUN);
    assert!((fully_visible.opacity - 1.0).abs() < 1e-9);

    let end = flight.sample(RUN, RUN);
    assert_eq!(end.pose, EXIT);
    assert_eq!(end.opacity, 0.0);
}

#[test]
fn flies_left_to_right() {
    let flight = RavenFlight::new();
    let mut last = f64::NEG_INFINITY;
    for ms in (0..=2800).step_by(100) {
        let x = flight.sample(Millis(ms), RUN).pose.translate.x;
        assert!(x >= last, "x went backwards at {ms}ms");
        last = x;
    }
}

#[test]
fn affine_scales_offset_by_box_size() {
    let pose = FlightPose::new(0.5, -0.25, 1.0, 0.0);
    let affine = pose.to_affine(Vec2::new(200.0, 100.0));
    let origin = affine * kurbo::Point::ORIGIN;
    assert!((origin.x - 100.0).abs() < 1e-9);
    assert!((origin.y + 25.0).abs() < 1e-9);
}

#[test]
fn hidden_pose_is_transparent() {
    assert_eq!(RavenFlight::new().hidden().opacity, 0.0);
}
