use super::*;

fn kf(at: f64, value: f64) -> Keyframe<f64> {
    Keyframe { at, value }
}

#[test]
fn holds_outside_keyed_range() {
    let track = Track::new(vec![kf(0.2, 1.0), kf(0.8, 3.0)], Ease::Linear).unwrap();
    assert_eq!(track.sample(0.0), 1.0);
    assert_eq!(track.sample(1.0), 3.0);
}

#[test]
fn interpolates_inside_segments() {
    let track = Track::new(vec![kf(0.0, 0.0), kf(0.5, 10.0), kf(1.0, 0.0)], Ease::Linear).unwrap();
    assert!((track.sample(0.25) - 5.0).abs() < 1e-9);
    assert!((track.sample(0.5) - 10.0).abs() < 1e-9);
    assert!((track.sample(0.75) - 5.0).abs() < 1e-9);
}

#[test]
fn easing_restarts_per_segment() {
    let track = Track::new(
        vec![kf(0.0, 0.0), kf(0.5, 1.0), kf(1.0, 2.0)],
        Ease::RAVEN_FLIGHT,
    )
    .unwrap();
    let first = track.sample(0.25);
    let second = track.sample(0.75) - 1.0;
    assert!((first - second).abs() < 1e-9);
    assert!((first - Ease::RAVEN_FLIGHT.apply(0.5)).abs() < 1e-9);
    assert!((first - 0.5).abs() > 1e-3);
}

#[test]
fn validation_rejects_bad_keys() {
    assert!(Track::<f64>::new(vec![], Ease::Linear).is_err());
    assert!(Track::new(vec![kf(0.6, 0.0), kf(0.2, 1.0)], Ease::Linear).is_err());
    assert!(Track::new(vec![kf(1.5, 0.0)], Ease::Linear).is_err());
    assert!(Track::new(vec![kf(f64::NAN, 0.0)], Ease::Linear).is_err());
}
