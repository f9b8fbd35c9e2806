#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_site_timing() {
    let config = CarouselConfig::default();
    assert_eq!(config.transition, TransitionStyle::Slide);
    assert_eq!(config.transition_ms, 500.0);
    assert_eq!(config.settle_ms, 50.0);
    assert_eq!(config.autoplay_ms, Some(10_000.0));
    assert_eq!(config.swipe_threshold_px, 50.0);
    assert_eq!(config.jitter_px, 10.0);
    assert_eq!(config.arrow_flash_ms, 200.0);
    assert!(config.keyboard);
    assert_eq!(config.transition_total_ms(), 550.0);
}

#[test]
fn default_is_valid() {
    assert!(CarouselConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_string_is_default() {
    assert_eq!(CarouselConfig::from_json("").unwrap(), CarouselConfig::default());
    assert_eq!(CarouselConfig::from_json("   ").unwrap(), CarouselConfig::default());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(CarouselConfig::from_json("{}").unwrap(), CarouselConfig::default());
}

#[test]
fn from_json_reads_overrides() {
    let config = CarouselConfig::from_json(
        r#"{"transition": "crossfade", "transitionMs": 600, "autoplayMs": 8000, "prevSelector": ".left-arrow"}"#,
    )
    .unwrap();
    assert_eq!(config.transition, TransitionStyle::Crossfade);
    assert_eq!(config.transition_ms, 600.0);
    assert_eq!(config.autoplay_ms, Some(8000.0));
    assert_eq!(config.prev_selector.as_deref(), Some(".left-arrow"));
    assert_eq!(config.swipe_threshold_px, 50.0);
}

#[test]
fn from_json_null_autoplay_disables_it() {
    let config = CarouselConfig::from_json(r#"{"autoplayMs": null}"#).unwrap();
    assert_eq!(config.autoplay_ms, None);
}

#[test]
fn from_json_malformed_is_parse_error() {
    let err = CarouselConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, CarouselConfigError::Parse(_)));
}

#[test]
fn from_json_unknown_transition_is_parse_error() {
    let err = CarouselConfig::from_json(r#"{"transition": "spin"}"#).unwrap_err();
    assert!(matches!(err, CarouselConfigError::Parse(_)));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_negative_threshold() {
    let config = CarouselConfig { swipe_threshold_px: -1.0, ..CarouselConfig::default() };
    assert_eq!(
        config.validate().unwrap_err(),
        CarouselConfigError::NotFinite { field: "swipeThresholdPx", value: -1.0 }
    );
}

#[test]
fn validate_rejects_zero_transition() {
    let config = CarouselConfig { transition_ms: 0.0, ..CarouselConfig::default() };
    assert_eq!(config.validate().unwrap_err(), CarouselConfigError::ZeroTransition);
}

#[test]
fn validate_rejects_zero_autoplay() {
    let config = CarouselConfig { autoplay_ms: Some(0.0), ..CarouselConfig::default() };
    assert_eq!(config.validate().unwrap_err(), CarouselConfigError::ZeroAutoplay);
}

#[test]
fn validate_rejects_autoplay_below_minimum() {
    let config = CarouselConfig { autoplay_ms: Some(1e-6), ..CarouselConfig::default() };
    assert_eq!(
        config.validate().unwrap_err(),
        CarouselConfigError::AutoplayTooShort { min: MIN_AUTOPLAY_MS, value: 1e-6 }
    );
    let config = CarouselConfig { autoplay_ms: Some(MIN_AUTOPLAY_MS), ..CarouselConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_jitter_above_swipe() {
    let config = CarouselConfig { jitter_px: 60.0, ..CarouselConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("jitterPx"));
}

#[test]
fn validate_accepts_zero_settle() {
    let config = CarouselConfig { settle_ms: 0.0, ..CarouselConfig::default() };
    assert!(config.validate().is_ok());
}
