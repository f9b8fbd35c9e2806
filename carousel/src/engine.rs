//! The carousel state machine.
//!
//! `CarouselCore` owns every piece of carousel state: the committed index, the
//! in-flight transition (the gate), the autoplay deadline, the drag gesture and
//! the short-lived UI deadlines (arrow flash, scroll indicator). It never
//! touches the DOM. Every operation takes the current time in milliseconds and
//! returns the [`Action`]s the host must apply; timed work is expressed as
//! deadlines that the host wakes up for via [`CarouselCore::next_deadline`] and
//! [`CarouselCore::tick`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::CarouselConfig;
use crate::consts::MIN_AUTOPLAY_MS;
use crate::input::{ArrowSide, Command, GestureState, InputEvent, PointerSource};

/// Which way a transition moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Incoming slide enters from the trailing edge; outgoing exits toward the leading edge.
    Forward,
    /// Mirror of `Forward`.
    Backward,
}

/// Visual effects returned for the host to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to show: replace the container contents with `message`.
    ShowFallback { message: String },
    /// First placement: make `index` visible at rest, no animation.
    PlaceAtRest { index: usize },
    /// Stage the incoming slide off-screen with transitions disabled.
    PrepareEntry { index: usize, direction: Direction },
    /// Run the outgoing and incoming animations concurrently.
    Animate { outgoing: usize, incoming: usize, direction: Direction },
    /// Transition finished: `outgoing` returns to hidden rest, `incoming` is current.
    Settle { outgoing: usize, incoming: usize },
    /// Call `preventDefault()` on the event being handled.
    SuppressDefault,
    /// Toggle the grabbing cursor for a mouse drag.
    SetGrabbing(bool),
    /// Highlight an arrow affordance.
    FlashArrow(ArrowSide),
    /// Remove an arrow highlight.
    ClearArrowFlash(ArrowSide),
    /// Mark the info panel of slide `index` as scrolling.
    MarkScrolling { index: usize },
    /// Clear the scrolling mark of slide `index`.
    ClearScrolling { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Empty,
    Running,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Staged,
    Animating,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: usize,
    to: usize,
    direction: Direction,
    phase: Phase,
    animate_at: f64,
    finish_at: f64,
}

/// Timed work, ordered by firing priority for equal deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Deadline {
    Animate,
    Finish,
    Flash(ArrowSlot),
    ScrollIdle(usize),
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ArrowSlot {
    Prev,
    Next,
}

impl From<ArrowSide> for ArrowSlot {
    fn from(side: ArrowSide) -> Self {
        match side {
            ArrowSide::Prev => Self::Prev,
            ArrowSide::Next => Self::Next,
        }
    }
}

impl From<ArrowSlot> for ArrowSide {
    fn from(slot: ArrowSlot) -> Self {
        match slot {
            ArrowSlot::Prev => Self::Prev,
            ArrowSlot::Next => Self::Next,
        }
    }
}

/// Core carousel state: all logic that doesn't depend on the DOM.
///
/// Separated from [`crate::host::Carousel`] so it can be tested without
/// WASM/browser dependencies, driving time by hand.
#[derive(Debug, Clone)]
pub struct CarouselCore {
    config: CarouselConfig,
    slide_count: usize,
    lifecycle: Lifecycle,
    current: Option<usize>,
    transition: Option<Transition>,
    autoplay_due: Option<f64>,
    gesture: GestureState,
    hovering: bool,
    prev_flash_until: Option<f64>,
    next_flash_until: Option<f64>,
    scroll_idle_at: Vec<Option<f64>>,
}

impl CarouselCore {
    /// Create a controller for `slide_count` slides. Nothing happens until [`Self::start`].
    #[must_use]
    pub fn new(slide_count: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            slide_count,
            lifecycle: Lifecycle::Created,
            current: None,
            transition: None,
            autoplay_due: None,
            gesture: GestureState::Idle,
            hovering: false,
            prev_flash_until: None,
            next_flash_until: None,
            scroll_idle_at: vec![None; slide_count],
        }
    }

    // --- Lifecycle ---

    /// Place the first slide and start autoplay, or show the fallback when
    /// there are no slides. Only the first call has any effect.
    pub fn start(&mut self, now: f64) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Created {
            return Vec::new();
        }
        if self.slide_count == 0 {
            self.lifecycle = Lifecycle::Empty;
            log::debug!("carousel has no slides; showing fallback");
            return vec![Action::ShowFallback { message: self.config.fallback_message.clone() }];
        }
        self.lifecycle = Lifecycle::Running;
        let actions = self.show_slide(0, Direction::Forward, now);
        self.start_autoplay(now);
        actions
    }

    /// Clear every deadline and gesture; all later calls become no-ops.
    pub fn teardown(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
        self.transition = None;
        self.autoplay_due = None;
        self.gesture = GestureState::Idle;
        self.hovering = false;
        self.prev_flash_until = None;
        self.next_flash_until = None;
        self.scroll_idle_at.iter_mut().for_each(|slot| *slot = None);
    }

    // --- Navigation ---

    /// Show the slide at `target` (wrapped into range), moving in `direction`.
    ///
    /// Dropped silently while a transition is in flight. The first call places
    /// the slide at rest without animating anything.
    pub fn show_slide(&mut self, target: i64, direction: Direction, now: f64) -> Vec<Action> {
        if !self.is_running() {
            return Vec::new();
        }
        if self.transition.is_some() {
            log::debug!("navigation to {target} dropped: transition in flight");
            return Vec::new();
        }
        let index = self.wrap(target);
        match self.current {
            None => {
                self.current = Some(index);
                vec![Action::PlaceAtRest { index }]
            }
            Some(current) if current == index => Vec::new(),
            Some(current) => {
                let animate_at = now + self.config.settle_ms;
                self.transition = Some(Transition {
                    from: current,
                    to: index,
                    direction,
                    phase: Phase::Staged,
                    animate_at,
                    finish_at: animate_at + self.config.transition_ms,
                });
                vec![Action::PrepareEntry { index, direction }]
            }
        }
    }

    /// Move to the next slide, wrapping from the last to the first.
    pub fn advance(&mut self, now: f64) -> Vec<Action> {
        let target = self.current_as_i64() + 1;
        self.show_slide(target, Direction::Forward, now)
    }

    /// Move to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self, now: f64) -> Vec<Action> {
        let target = self.current_as_i64() - 1;
        self.show_slide(target, Direction::Backward, now)
    }

    fn dispatch(&mut self, command: Command, now: f64) -> Vec<Action> {
        match command {
            Command::Advance => self.advance(now),
            Command::Retreat => self.retreat(now),
            Command::None => Vec::new(),
        }
    }

    // --- Autoplay ---

    /// (Re)start autoplay: any pending tick is replaced by one a full period from `now`.
    pub fn start_autoplay(&mut self, now: f64) {
        self.autoplay_due = None;
        if !self.is_running() {
            return;
        }
        if let Some(period) = self.autoplay_period() {
            self.autoplay_due = Some(now + period);
        }
    }

    /// Cancel the pending autoplay tick. An in-flight transition is unaffected.
    pub fn stop_autoplay(&mut self) {
        self.autoplay_due = None;
    }

    /// Restart autoplay after a discrete interaction, unless a drag is still
    /// held or the pointer still rests on the surface. Their own end events
    /// restart it.
    fn resume_autoplay(&mut self, now: f64) {
        if self.gesture.is_active() || self.hovering {
            return;
        }
        self.start_autoplay(now);
    }

    /// Effective period: disabled when unset or non-positive, never below [`MIN_AUTOPLAY_MS`].
    fn autoplay_period(&self) -> Option<f64> {
        self.config
            .autoplay_ms
            .filter(|period| period.is_finite() && *period > 0.0)
            .map(|period| period.max(MIN_AUTOPLAY_MS))
    }

    // --- Input ---

    /// Feed one input event through the normalization layer.
    pub fn handle(&mut self, event: InputEvent, now: f64) -> Vec<Action> {
        if !self.is_running() {
            return Vec::new();
        }
        match event {
            InputEvent::PointerEnter => {
                self.hovering = true;
                self.stop_autoplay();
                Vec::new()
            }
            InputEvent::PointerDown { source, x } => {
                if !self.gesture.begin(source, x) {
                    return Vec::new();
                }
                self.stop_autoplay();
                if source == PointerSource::Mouse {
                    vec![Action::SetGrabbing(true)]
                } else {
                    Vec::new()
                }
            }
            InputEvent::PointerMove { source, x } => {
                if self.gesture.track(source, x, self.config.jitter_px) {
                    vec![Action::SuppressDefault]
                } else {
                    Vec::new()
                }
            }
            InputEvent::PointerUp { source } => self.end_gesture(Some(source), now),
            InputEvent::PointerLeave => {
                self.hovering = false;
                let actions = self.end_gesture(None, now);
                self.start_autoplay(now);
                actions
            }
            InputEvent::KeyDown(key) => {
                if !self.config.keyboard {
                    return Vec::new();
                }
                let command = key.command();
                if command == Command::None {
                    return Vec::new();
                }
                self.stop_autoplay();
                let actions = self.dispatch(command, now);
                self.resume_autoplay(now);
                actions
            }
            InputEvent::ArrowActivated(side) => {
                self.stop_autoplay();
                let mut actions = self.dispatch(side.into(), now);
                let until = Some(now + self.config.arrow_flash_ms);
                match side {
                    ArrowSide::Prev => self.prev_flash_until = until,
                    ArrowSide::Next => self.next_flash_until = until,
                }
                actions.push(Action::FlashArrow(side));
                self.resume_autoplay(now);
                actions
            }
            InputEvent::InfoScrolled { index } => match self.scroll_idle_at.get_mut(index) {
                Some(slot) => {
                    *slot = Some(now + self.config.scroll_idle_ms);
                    vec![Action::MarkScrolling { index }]
                }
                None => Vec::new(),
            },
        }
    }

    fn end_gesture(&mut self, source: Option<PointerSource>, now: f64) -> Vec<Action> {
        let owner = match self.gesture {
            GestureState::Dragging { source, .. } => source,
            GestureState::Idle => return Vec::new(),
        };
        let Some(command) = self.gesture.finish(source, self.config.swipe_threshold_px) else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        if owner == PointerSource::Mouse {
            actions.push(Action::SetGrabbing(false));
        }
        actions.extend(self.dispatch(command, now));
        self.resume_autoplay(now);
        actions
    }

    // --- Time ---

    /// Earliest pending deadline, if any. The host should call [`Self::tick`] at or after it.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.next_due().map(|(at, _)| at)
    }

    /// Fire every deadline due at or before `now`, in time order.
    pub fn tick(&mut self, now: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some((at, deadline)) = self.next_due() {
            if at > now {
                break;
            }
            self.fire(deadline, at, now, &mut actions);
        }
        actions
    }

    fn next_due(&self) -> Option<(f64, Deadline)> {
        let mut due: Vec<(f64, Deadline)> = Vec::new();
        if let Some(transition) = self.transition {
            match transition.phase {
                Phase::Staged => due.push((transition.animate_at, Deadline::Animate)),
                Phase::Animating => due.push((transition.finish_at, Deadline::Finish)),
            }
        }
        if let Some(at) = self.prev_flash_until {
            due.push((at, Deadline::Flash(ArrowSlot::Prev)));
        }
        if let Some(at) = self.next_flash_until {
            due.push((at, Deadline::Flash(ArrowSlot::Next)));
        }
        for (index, slot) in self.scroll_idle_at.iter().enumerate() {
            if let Some(at) = slot {
                due.push((*at, Deadline::ScrollIdle(index)));
            }
        }
        if let Some(at) = self.autoplay_due {
            due.push((at, Deadline::Autoplay));
        }
        due.into_iter().min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
    }

    fn fire(&mut self, deadline: Deadline, at: f64, now: f64, actions: &mut Vec<Action>) {
        match deadline {
            Deadline::Animate => {
                if let Some(transition) = self.transition.as_mut() {
                    transition.phase = Phase::Animating;
                    actions.push(Action::Animate {
                        outgoing: transition.from,
                        incoming: transition.to,
                        direction: transition.direction,
                    });
                }
            }
            Deadline::Finish => {
                if let Some(transition) = self.transition.take() {
                    self.current = Some(transition.to);
                    actions.push(Action::Settle { outgoing: transition.from, incoming: transition.to });
                }
            }
            Deadline::Flash(slot) => {
                match slot {
                    ArrowSlot::Prev => self.prev_flash_until = None,
                    ArrowSlot::Next => self.next_flash_until = None,
                }
                actions.push(Action::ClearArrowFlash(slot.into()));
            }
            Deadline::ScrollIdle(index) => {
                if let Some(slot) = self.scroll_idle_at.get_mut(index) {
                    *slot = None;
                }
                actions.push(Action::ClearScrolling { index });
            }
            Deadline::Autoplay => {
                let Some(period) = self.autoplay_period() else {
                    self.autoplay_due = None;
                    return;
                };
                // Skip ticks missed while the host was asleep instead of bursting.
                let missed = ((now - at) / period).floor().max(0.0) + 1.0;
                let mut next = at + missed * period;
                if next <= now {
                    next = now + period;
                }
                self.autoplay_due = Some(next);
                actions.extend(self.advance(now));
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Committed slide index; `None` before the first placement.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Destination of the in-flight transition, if any.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        self.transition.map(|t| t.to)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay_due.is_some()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the carousel has slides and has not been torn down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Whether `start` ran against an empty sequence.
    #[must_use]
    pub fn is_empty_fallback(&self) -> bool {
        self.lifecycle == Lifecycle::Empty
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    fn current_as_i64(&self) -> i64 {
        self.current.map_or(0, |i| i64::try_from(i).unwrap_or(i64::MAX))
    }

    fn wrap(&self, target: i64) -> usize {
        let count = i64::try_from(self.slide_count).unwrap_or(i64::MAX);
        usize::try_from(target.rem_euclid(count)).unwrap_or(0)
    }
}
