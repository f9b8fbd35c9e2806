use super::*;

// =============================================================
// Key
// =============================================================

#[test]
fn key_arrow_left_retreats() {
    assert_eq!(Key("ArrowLeft".into()).command(), Command::Retreat);
}

#[test]
fn key_arrow_right_advances() {
    assert_eq!(Key("ArrowRight".into()).command(), Command::Advance);
}

#[test]
fn key_other_keys_do_nothing() {
    for name in ["ArrowUp", "ArrowDown", "Enter", "a", ""] {
        assert_eq!(Key(name.into()).command(), Command::None, "{name}");
    }
}

// =============================================================
// ArrowSide
// =============================================================

#[test]
fn arrow_side_maps_to_command() {
    assert_eq!(Command::from(ArrowSide::Prev), Command::Retreat);
    assert_eq!(Command::from(ArrowSide::Next), Command::Advance);
}

// =============================================================
// swipe_command
// =============================================================

#[test]
fn swipe_below_threshold_is_tap() {
    assert_eq!(swipe_command(49.0, 50.0), Command::None);
    assert_eq!(swipe_command(-49.0, 50.0), Command::None);
}

#[test]
fn swipe_exactly_at_threshold_is_tap() {
    assert_eq!(swipe_command(50.0, 50.0), Command::None);
    assert_eq!(swipe_command(-50.0, 50.0), Command::None);
}

#[test]
fn swipe_past_threshold_navigates() {
    assert_eq!(swipe_command(51.0, 50.0), Command::Advance);
    assert_eq!(swipe_command(-51.0, 50.0), Command::Retreat);
}

#[test]
fn swipe_zero_is_tap() {
    assert_eq!(swipe_command(0.0, 50.0), Command::None);
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn gesture_default_is_idle() {
    let g = GestureState::default();
    assert!(!g.is_active());
    assert_eq!(g.displacement(), None);
}

#[test]
fn gesture_begin_records_start() {
    let mut g = GestureState::default();
    assert!(g.begin(PointerSource::Touch, 300.0));
    assert!(g.is_active());
    assert_eq!(g.displacement(), Some(0.0));
}

#[test]
fn gesture_begin_while_active_is_rejected() {
    let mut g = GestureState::default();
    assert!(g.begin(PointerSource::Touch, 300.0));
    assert!(!g.begin(PointerSource::Mouse, 10.0));
    assert!(matches!(g, GestureState::Dragging { source: PointerSource::Touch, .. }));
}

#[test]
fn gesture_track_updates_displacement() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Mouse, 300.0);
    g.track(PointerSource::Mouse, 240.0, 10.0);
    assert_eq!(g.displacement(), Some(60.0));
}

#[test]
fn gesture_track_within_jitter_does_not_suppress() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 300.0);
    assert!(!g.track(PointerSource::Touch, 292.0, 10.0));
    assert!(!g.track(PointerSource::Touch, 310.0, 10.0));
}

#[test]
fn gesture_track_past_jitter_suppresses_for_rest_of_gesture() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 300.0);
    assert!(g.track(PointerSource::Touch, 280.0, 10.0));
    // Back inside the jitter band: still suppressed.
    assert!(g.track(PointerSource::Touch, 298.0, 10.0));
}

#[test]
fn gesture_track_ignores_other_source() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 300.0);
    assert!(!g.track(PointerSource::Mouse, 0.0, 10.0));
    assert_eq!(g.displacement(), Some(0.0));
}

#[test]
fn gesture_track_when_idle_is_noop() {
    let mut g = GestureState::default();
    assert!(!g.track(PointerSource::Mouse, 100.0, 10.0));
    assert!(!g.is_active());
}

#[test]
fn gesture_finish_left_swipe_advances() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 300.0);
    g.track(PointerSource::Touch, 249.0, 10.0);
    assert_eq!(g.finish(Some(PointerSource::Touch), 50.0), Some(Command::Advance));
    assert!(!g.is_active());
}

#[test]
fn gesture_finish_right_swipe_retreats() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Mouse, 100.0);
    g.track(PointerSource::Mouse, 151.0, 10.0);
    assert_eq!(g.finish(Some(PointerSource::Mouse), 50.0), Some(Command::Retreat));
}

#[test]
fn gesture_finish_short_drag_resets_without_command() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Mouse, 100.0);
    g.track(PointerSource::Mouse, 149.0, 10.0);
    assert_eq!(g.finish(Some(PointerSource::Mouse), 50.0), Some(Command::None));
    assert!(!g.is_active());
}

#[test]
fn gesture_finish_without_source_ends_any_gesture() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Mouse, 100.0);
    g.track(PointerSource::Mouse, 20.0, 10.0);
    assert_eq!(g.finish(None, 50.0), Some(Command::Advance));
}

#[test]
fn gesture_finish_from_other_source_is_ignored() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 100.0);
    assert_eq!(g.finish(Some(PointerSource::Mouse), 50.0), None);
    assert!(g.is_active());
}

#[test]
fn gesture_finish_when_idle_returns_none() {
    let mut g = GestureState::default();
    assert_eq!(g.finish(None, 50.0), None);
}

#[test]
fn gesture_start_at_zero_still_tracks() {
    let mut g = GestureState::default();
    g.begin(PointerSource::Touch, 0.0);
    g.track(PointerSource::Touch, 80.0, 10.0);
    assert_eq!(g.finish(Some(PointerSource::Touch), 50.0), Some(Command::Retreat));
}
