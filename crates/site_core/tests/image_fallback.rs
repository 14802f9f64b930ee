use site_core::{FallbackAsset, ImageSlot, ImageState};

#[test]
fn starts_on_original_source() {
    let slot = ImageSlot::new("/images/event3.jpg", "Workshop", FallbackAsset::Event);
    assert_eq!(slot.current_src(), "/images/event3.jpg");
    assert_eq!(slot.state(), ImageState::Original);
    assert_eq!(slot.alt(), "Workshop");
}

#[test]
fn load_error_switches_once_to_placeholder() {
    let mut slot = ImageSlot::new(
        "https://unreachable.invalid/thumb.jpg",
        "Lecture",
        FallbackAsset::Video,
    );

    assert!(slot.on_load_error());
    assert_eq!(slot.current_src(), "/images/video-placeholder.svg");

    // Further errors (e.g. from re-renders) are no-ops and never revert.
    for _ in 0..3 {
        assert!(!slot.on_load_error());
        assert_eq!(slot.current_src(), "/images/video-placeholder.svg");
        assert!(slot.is_fallback());
    }
    assert_eq!(slot.original_src(), "https://unreachable.invalid/thumb.jpg");
}

#[test]
fn each_asset_kind_has_its_own_placeholder() {
    assert_eq!(FallbackAsset::Event.path(), "/images/event-placeholder.svg");
    assert_eq!(FallbackAsset::Video.path(), "/images/video-placeholder.svg");
    assert_eq!(FallbackAsset::Generic.path(), "/images/placeholder.svg");
}

#[test]
fn slots_are_independent() {
    let mut first = ImageSlot::new("/images/a.png", "a", FallbackAsset::Event);
    let second = first.clone();
    first.on_load_error();
    assert!(first.is_fallback());
    assert!(!second.is_fallback());
}
