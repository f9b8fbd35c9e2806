//! Shared timing and distance constants for the carousel crate.

// ── Gestures ────────────────────────────────────────────────────

/// Minimum net horizontal displacement, in CSS pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Displacement past which the surface's default scroll/pan is suppressed.
pub const DRAG_JITTER_PX: f64 = 10.0;

// ── Timing ──────────────────────────────────────────────────────

/// Duration of the slide-in / slide-out animation.
pub const TRANSITION_MS: f64 = 500.0;

/// Delay between staging the incoming slide and starting the animation,
/// giving the browser one frame to commit the staged position.
pub const SETTLE_MS: f64 = 50.0;

/// Autoplay period.
pub const AUTOPLAY_MS: f64 = 10_000.0;

/// Shortest autoplay period accepted from options.
pub const MIN_AUTOPLAY_MS: f64 = 100.0;

/// How long an arrow affordance stays highlighted after activation.
pub const ARROW_FLASH_MS: f64 = 200.0;

/// Idle time after the last info-panel scroll before the indicator clears.
pub const SCROLL_IDLE_MS: f64 = 400.0;

// ── Rendering ───────────────────────────────────────────────────

/// Page the slide media links to; the record id is appended as `?id=`.
pub const DETAIL_BASE: &str = "project-template.html";

/// Message written into the container when there is nothing to show.
pub const FALLBACK_MESSAGE: &str = "No projects to display.";

/// Class toggled on the active slide view.
pub const ACTIVE_CLASS: &str = "active";

/// Class toggled on an arrow affordance while it is flashing.
pub const FLASH_CLASS: &str = "pressed";

/// Class toggled on an info panel while it is being scrolled.
pub const SCROLLING_CLASS: &str = "scrolling";
