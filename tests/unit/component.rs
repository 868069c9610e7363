use super::*;

fn png(tag: u8) -> ImageFile {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([tag, tag, tag, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    ImageFile::new(format!("still-{tag}.png"), buf)
}

#[test]
fn mounting_plays_immediately() {
    let t = RavenTransition::with_defaults();
    assert_eq!(t.now(), Millis::ZERO);
    assert_eq!(t.state().phase, AnimationPhase::Charge);
    assert!(t.state().is_animating);
    assert_eq!(t.pending_timers(), 3);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = TimelineConfig {
        reveal_delay: Millis(100),
        ..TimelineConfig::default()
    };
    assert!(RavenTransition::new(cfg).is_err());
}

#[test]
fn swaps_coalesce_into_one_replay() {
    let mut t = RavenTransition::with_defaults();
    t.advance_to(Millis(3000));
    assert!(t.set_image(Slot::Source, Some(png(1))));
    assert!(t.set_image(Slot::Target, Some(png(2))));
    assert_eq!(t.pending_timers(), 1);

    t.advance_to(Millis(3008));
    assert_eq!(t.timeline().runs(), 2);
    assert_eq!(t.state().phase, AnimationPhase::Charge);
}

#[test]
fn empty_selection_does_not_replay() {
    let mut t = RavenTransition::with_defaults();
    t.advance_to(Millis(3000));
    assert!(!t.set_image(Slot::Source, None));
    assert_eq!(t.pending_timers(), 0);
    t.advance_to(Millis(4000));
    assert_eq!(t.timeline().runs(), 1);
}

#[test]
fn presentation_follows_the_run() {
    let mut t = RavenTransition::with_defaults();
    let start = t.presentation();
    assert_eq!(start.source_opacity, 1.0);
    assert_eq!(start.silhouette.opacity, 0.0);
    assert!(start.aura.pulsing);

    t.advance_to(Millis(1456));
    let mid = t.presentation();
    assert_eq!(mid.target_opacity, 1.0);
    assert!(mid.silhouette.opacity > 0.0);
    assert_eq!(mid.aura.core.opacity, 0.7);

    t.advance_to(Millis(2800));
    let done = t.presentation();
    assert_eq!(done.silhouette.opacity, 0.0);
    assert_eq!(done.aura.layer_opacity, 0.0);
    assert_eq!(done.target_opacity, 1.0);
}

#[test]
fn dispose_is_final() {
    let mut t = RavenTransition::with_defaults();
    t.set_image(Slot::Source, Some(png(3)));
    let report = t.dispose();
    assert_eq!(
        report,
        TeardownReport {
            timers_cancelled: 4,
            handles_released: 1,
        }
    );
    assert!(t.is_disposed());

    t.play();
    assert!(!t.set_image(Slot::Target, Some(png(4))));
    assert_eq!(t.pending_timers(), 0);
    assert_eq!(t.live_handles(), 0);
    assert_eq!(t.dispose(), TeardownReport::default());
}
