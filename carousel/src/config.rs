//! Carousel options supplied by the host page.
//!
//! Every field has a default, so an empty JSON object (or no options at all)
//! yields the stock site behavior. Options are validated once at mount time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ARROW_FLASH_MS, AUTOPLAY_MS, DETAIL_BASE, DRAG_JITTER_PX, FALLBACK_MESSAGE, MIN_AUTOPLAY_MS, SCROLL_IDLE_MS,
    SETTLE_MS, SWIPE_THRESHOLD_PX, TRANSITION_MS,
};

/// How the incoming and outgoing slides move during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// Translate by one container width while fading.
    #[default]
    Slide,
    /// Fade in place.
    Crossfade,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CarouselConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("transitionMs must be greater than zero")]
    ZeroTransition,
    #[error("autoplayMs must be greater than zero when set")]
    ZeroAutoplay,
    #[error("autoplayMs must be at least {min} (got {value})")]
    AutoplayTooShort { min: f64, value: f64 },
    #[error("jitterPx ({jitter}) must not exceed swipeThresholdPx ({swipe})")]
    JitterExceedsSwipe { jitter: f64, swipe: f64 },
    #[error("invalid carousel options: {0}")]
    Parse(String),
}

/// Tunable timing, thresholds and rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    pub transition: TransitionStyle,
    pub transition_ms: f64,
    pub settle_ms: f64,
    /// `None` disables autoplay entirely.
    pub autoplay_ms: Option<f64>,
    pub swipe_threshold_px: f64,
    pub jitter_px: f64,
    pub arrow_flash_ms: f64,
    pub scroll_idle_ms: f64,
    /// Bind Left/Right arrow keys on the document.
    pub keyboard: bool,
    pub detail_base: String,
    pub fallback_message: String,
    pub prev_selector: Option<String>,
    pub next_selector: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition: TransitionStyle::Slide,
            transition_ms: TRANSITION_MS,
            settle_ms: SETTLE_MS,
            autoplay_ms: Some(AUTOPLAY_MS),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            jitter_px: DRAG_JITTER_PX,
            arrow_flash_ms: ARROW_FLASH_MS,
            scroll_idle_ms: SCROLL_IDLE_MS,
            keyboard: true,
            detail_base: DETAIL_BASE.to_owned(),
            fallback_message: FALLBACK_MESSAGE.to_owned(),
            prev_selector: None,
            next_selector: None,
        }
    }
}

impl CarouselConfig {
    /// Parse options JSON. An empty or whitespace-only string means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselConfigError::Parse`] for malformed JSON and any
    /// validation error from [`CarouselConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, CarouselConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw).map_err(|e| CarouselConfigError::Parse(e.to_string()))?;
        config.validate()
    }

    /// Check numeric ranges and return the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(self) -> Result<Self, CarouselConfigError> {
        for (field, value) in [
            ("transitionMs", self.transition_ms),
            ("settleMs", self.settle_ms),
            ("swipeThresholdPx", self.swipe_threshold_px),
            ("jitterPx", self.jitter_px),
            ("arrowFlashMs", self.arrow_flash_ms),
            ("scrollIdleMs", self.scroll_idle_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CarouselConfigError::NotFinite { field, value });
            }
        }
        if self.transition_ms <= 0.0 {
            return Err(CarouselConfigError::ZeroTransition);
        }
        if let Some(period) = self.autoplay_ms {
            if !period.is_finite() || period < 0.0 {
                return Err(CarouselConfigError::NotFinite { field: "autoplayMs", value: period });
            }
            if period <= 0.0 {
                return Err(CarouselConfigError::ZeroAutoplay);
            }
            if period < MIN_AUTOPLAY_MS {
                return Err(CarouselConfigError::AutoplayTooShort { min: MIN_AUTOPLAY_MS, value: period });
            }
        }
        if self.jitter_px > self.swipe_threshold_px {
            return Err(CarouselConfigError::JitterExceedsSwipe { jitter: self.jitter_px, swipe: self.swipe_threshold_px });
        }
        Ok(self)
    }

    /// Time from a navigation request until the gate reopens.
    #[must_use]
    pub fn transition_total_ms(&self) -> f64 {
        self.settle_ms + self.transition_ms
    }
}
