use super::*;

fn file(name: &str) -> ImageFile {
    ImageFile::new(name, name.as_bytes().to_vec())
}

#[test]
fn unsubstituted_slots_resolve_to_fallbacks() {
    let mgr = ImageResourceManager::new();
    let source = mgr.resolve(Slot::Source);
    let target = mgr.resolve(Slot::Target);
    assert_eq!(source.url, "/images/source-scene.svg");
    assert_eq!(target.url, "/images/target-scene.svg");
    assert!(!source.custom && !target.custom);
    assert_eq!(target.alt, "Transformed frame");
}

#[test]
fn missing_file_is_a_noop() {
    let mut mgr = ImageResourceManager::new();
    assert!(!mgr.set_image(Slot::Source, None));
    assert!(mgr.handle(Slot::Source).is_none());
    assert_eq!(mgr.blobs().stats().created, 0);
}

#[test]
fn replacing_releases_the_previous_handle_first() {
    let mut mgr = ImageResourceManager::new();
    assert!(mgr.set_image(Slot::Source, Some(&file("f1"))));
    let first = mgr.handle(Slot::Source).cloned().unwrap();

    assert!(mgr.set_image(Slot::Source, Some(&file("f2"))));
    let second = mgr.handle(Slot::Source).cloned().unwrap();

    assert_ne!(first.id, second.id);
    assert!(!mgr.blobs().is_live(first.id));
    assert!(mgr.blobs().is_live(second.id));
    assert_eq!(mgr.blobs().live_count(), 1);
    assert_eq!(mgr.blobs().bytes(second.id), Some(&b"f2"[..]));
}

#[test]
fn slots_are_independent() {
    let mut mgr = ImageResourceManager::new();
    mgr.set_image(Slot::Source, Some(&file("a")));
    mgr.set_image(Slot::Target, Some(&file("b")));
    mgr.set_image(Slot::Target, Some(&file("c")));

    assert_eq!(mgr.blobs().live_count(), 2);
    let source = mgr.resolve(Slot::Source);
    assert!(source.custom);
    assert_eq!(source.url, mgr.handle(Slot::Source).unwrap().url);
    assert_eq!(source.alt, "Original frame");
}

#[test]
fn teardown_releases_everything() {
    let mut mgr = ImageResourceManager::new();
    mgr.set_image(Slot::Source, Some(&file("a")));
    mgr.set_image(Slot::Target, Some(&file("b")));
    mgr.set_image(Slot::Source, Some(&file("c")));

    assert_eq!(mgr.teardown(), 2);
    assert_eq!(mgr.blobs().live_count(), 0);
    assert_eq!(mgr.blobs().stats().created, mgr.blobs().stats().released);
    assert!(!mgr.resolve(Slot::Source).custom);
    assert_eq!(mgr.teardown(), 0);
}
