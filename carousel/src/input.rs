//! Input model: raw carousel events, the drag gesture tracker, and the
//! normalization of every input source into a single [`Command`].
//!
//! Touch, mouse-drag, keyboard and arrow affordances all reduce to
//! `Advance`, `Retreat` or `None` here, so the engine has exactly one
//! navigation entry point. `GestureState` is the active drag being tracked
//! between pointer-down and pointer-up/leave.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Finger on a touch screen (`touchstart` / `touchmove` / `touchend`).
    Touch,
    /// Mouse drag (`mousedown` / `mousemove` / `mouseup`).
    Mouse,
}

/// One of the optional previous/next arrow affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    /// The "previous" control; retreats.
    Prev,
    /// The "next" control; advances.
    Next,
}

/// A keyboard key as reported by the browser (e.g. `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Navigation bound to this key, if any.
    #[must_use]
    pub fn command(&self) -> Command {
        match self.0.as_str() {
            "ArrowLeft" => Command::Retreat,
            "ArrowRight" => Command::Advance,
            _ => Command::None,
        }
    }
}

/// Abstract navigation produced by the normalization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move to the next slide (forward).
    Advance,
    /// Move to the previous slide (backward).
    Retreat,
    /// No navigation.
    None,
}

impl From<ArrowSide> for Command {
    fn from(side: ArrowSide) -> Self {
        match side {
            ArrowSide::Prev => Self::Retreat,
            ArrowSide::Next => Self::Advance,
        }
    }
}

/// An input event delivered by the host to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer entered the carousel surface.
    PointerEnter,
    /// Pointer/touch pressed inside the surface at horizontal position `x`.
    PointerDown { source: PointerSource, x: f64 },
    /// Pointer/touch moved to horizontal position `x`.
    PointerMove { source: PointerSource, x: f64 },
    /// Pointer/touch released.
    PointerUp { source: PointerSource },
    /// Pointer left the surface; ends any gesture in progress.
    PointerLeave,
    /// A key was pressed anywhere on the page.
    KeyDown(Key),
    /// An arrow affordance was activated.
    ArrowActivated(ArrowSide),
    /// The info panel of the slide at `index` scrolled.
    InfoScrolled { index: usize },
}

/// Drag gesture tracked between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A press is held and being tracked.
    Dragging {
        /// Device that owns this gesture; events from the other device are ignored.
        source: PointerSource,
        /// Horizontal position of the press.
        start_x: f64,
        /// Most recent horizontal position.
        last_x: f64,
        /// Set once displacement passes the jitter threshold; sticky for the rest of the gesture.
        suppressing: bool,
    },
}

impl GestureState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Running displacement `start - last`; positive when the pointer moved toward the leading edge.
    #[must_use]
    pub fn displacement(&self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Dragging { start_x, last_x, .. } => Some(start_x - last_x),
        }
    }

    /// Start tracking a press. Returns `false` if another gesture already owns the surface.
    pub fn begin(&mut self, source: PointerSource, x: f64) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::Dragging { source, start_x: x, last_x: x, suppressing: false };
        true
    }

    /// Record a move. Returns `true` when the host should suppress the default
    /// scroll/pan for this event.
    pub fn track(&mut self, source: PointerSource, x: f64, jitter_px: f64) -> bool {
        let Self::Dragging { source: owner, start_x, last_x, suppressing } = self else {
            return false;
        };
        if *owner != source {
            return false;
        }
        *last_x = x;
        if !*suppressing && (*start_x - x).abs() > jitter_px {
            *suppressing = true;
        }
        *suppressing
    }

    /// End the gesture and translate it into a command.
    ///
    /// Returns `None` when there was no gesture to end (or `source` does not own
    /// it); otherwise the gesture is reset and the swipe command returned.
    pub fn finish(&mut self, source: Option<PointerSource>, threshold_px: f64) -> Option<Command> {
        let Self::Dragging { source: owner, .. } = *self else {
            return None;
        };
        if source.is_some_and(|s| s != owner) {
            return None;
        }
        let displacement = self.displacement().unwrap_or(0.0);
        *self = Self::Idle;
        Some(swipe_command(displacement, threshold_px))
    }
}

/// Translate a net displacement (`start - end`) into a command.
///
/// Only displacements strictly beyond the threshold navigate; anything within
/// it is a tap.
#[must_use]
pub fn swipe_command(displacement: f64, threshold_px: f64) -> Command {
    if displacement > threshold_px {
        Command::Advance
    } else if displacement < -threshold_px {
        Command::Retreat
    } else {
        Command::None
    }
}
