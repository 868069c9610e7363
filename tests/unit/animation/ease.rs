use super::*;

const ALL: [Ease; 2] = [Ease::Linear, Ease::RAVEN_FLIGHT];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn css_ease_reference_value() {
    // `ease` == cubic-bezier(0.25, 0.1, 0.25, 1.0); browsers report ~0.8024 at the midpoint.
    let ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    assert!((ease.apply(0.5) - 0.8024).abs() < 1e-3);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::RAVEN_FLIGHT.apply(-3.0), 0.0);
    assert_eq!(Ease::RAVEN_FLIGHT.apply(7.0), 1.0);
}
