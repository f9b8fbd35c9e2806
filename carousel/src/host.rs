//! DOM host: binds a [`CarouselCore`] to a container element in the page.
//!
//! The host builds one slide view per record, translates DOM events into
//! [`InputEvent`]s, applies the returned [`Action`]s as inline styles and class
//! toggles, and keeps exactly one browser timeout armed for the core's next
//! deadline. All listeners and the timer are owned by the [`CarouselHandle`]
//! and released on [`CarouselHandle::teardown`] or when the handle is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::config::{CarouselConfig, CarouselConfigError};
use crate::consts::{ACTIVE_CLASS, FLASH_CLASS, SCROLLING_CLASS};
use crate::content::{SlideContent, parse_slides};
use crate::engine::{Action, CarouselCore};
use crate::input::{ArrowSide, InputEvent, Key, PointerSource};
use crate::render::{CONTAINER_DECLARATIONS, SLIDE_DECLARATIONS, SlideStyle, fallback_markup, slide_markup};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no browser document available")]
    NoDocument,
    #[error("invalid slides payload: {0}")]
    Slides(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] CarouselConfigError),
    #[error("slide index {0} has no view")]
    MissingSlide(usize),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Wall-clock milliseconds, the time base for every core call.
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A registered DOM listener, kept so it can be removed again.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("carousel: failed to remove {} listener: {:?}", self.kind, err);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The live carousel: core state plus the DOM nodes it drives.
pub struct Carousel {
    container: HtmlElement,
    slides: Vec<HtmlElement>,
    infos: Vec<Option<Element>>,
    prev: Option<Element>,
    next: Option<Element>,
    core: CarouselCore,
    timer: Option<Timeout>,
    scheduled_at: Option<f64>,
}

impl Carousel {
    fn slide(&self, index: usize) -> Result<&HtmlElement, HostError> {
        self.slides.get(index).ok_or(HostError::MissingSlide(index))
    }

    fn arrow(&self, side: ArrowSide) -> Option<&Element> {
        match side {
            ArrowSide::Prev => self.prev.as_ref(),
            ArrowSide::Next => self.next.as_ref(),
        }
    }

    fn info(&self, index: usize) -> Option<&Element> {
        self.infos.get(index).and_then(Option::as_ref)
    }

    fn apply(&self, actions: &[Action], event: Option<&Event>) {
        for action in actions {
            if let Err(err) = self.apply_one(action, event) {
                log::warn!("carousel: {err}");
            }
        }
    }

    fn apply_one(&self, action: &Action, event: Option<&Event>) -> Result<(), HostError> {
        let config = self.core.config();
        match action {
            Action::ShowFallback { message } => self.container.set_inner_html(&fallback_markup(message)),
            Action::PlaceAtRest { index } => {
                let slide = self.slide(*index)?;
                set_style(slide, &SlideStyle::at_rest())?;
                slide.class_list().add_1(ACTIVE_CLASS)?;
            }
            Action::PrepareEntry { index, direction } => {
                let slide = self.slide(*index)?;
                set_style(slide, &SlideStyle::staged(*direction, config.transition))?;
                slide.class_list().add_1(ACTIVE_CLASS)?;
                force_layout(slide);
            }
            Action::Animate { outgoing, incoming, direction } => {
                let out = self.slide(*outgoing)?;
                set_style(out, &SlideStyle::leaving(*direction, config))?;
                out.class_list().remove_1(ACTIVE_CLASS)?;
                set_style(self.slide(*incoming)?, &SlideStyle::entering(config))?;
            }
            Action::Settle { outgoing, incoming } => {
                set_style(self.slide(*outgoing)?, &SlideStyle::hidden())?;
                set_style(self.slide(*incoming)?, &SlideStyle::at_rest())?;
            }
            Action::SuppressDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Action::SetGrabbing(grabbing) => {
                let cursor = if *grabbing { "grabbing" } else { "grab" };
                self.container.style().set_property("cursor", cursor)?;
            }
            Action::FlashArrow(side) => {
                if let Some(arrow) = self.arrow(*side) {
                    arrow.class_list().add_1(FLASH_CLASS)?;
                }
            }
            Action::ClearArrowFlash(side) => {
                if let Some(arrow) = self.arrow(*side) {
                    arrow.class_list().remove_1(FLASH_CLASS)?;
                }
            }
            Action::MarkScrolling { index } => {
                if let Some(info) = self.info(*index) {
                    info.class_list().add_1(SCROLLING_CLASS)?;
                }
            }
            Action::ClearScrolling { index } => {
                if let Some(info) = self.info(*index) {
                    info.class_list().remove_1(SCROLLING_CLASS)?;
                }
            }
        }
        Ok(())
    }
}

/// Read layout so the staged position is committed before the animation starts.
fn force_layout(element: &HtmlElement) {
    let height = element.offset_height();
    log::trace!("carousel: forced layout at height {height}");
}

fn set_style(element: &HtmlElement, style: &SlideStyle) -> Result<(), HostError> {
    let css = element.style();
    for (property, value) in style.declarations() {
        css.set_property(property, value)?;
    }
    Ok(())
}

fn set_declarations(element: &HtmlElement, declarations: &[(&str, &str)]) -> Result<(), HostError> {
    let css = element.style();
    for (property, value) in declarations {
        css.set_property(property, value)?;
    }
    Ok(())
}

// =============================================================
// Event plumbing
// =============================================================

/// Feed one input event to the core and apply the result.
fn dispatch(shared: &Rc<RefCell<Carousel>>, input: InputEvent, event: &Event) {
    {
        let Ok(mut carousel) = shared.try_borrow_mut() else {
            log::debug!("carousel: re-entrant event ignored");
            return;
        };
        let actions = carousel.core.handle(input, now_ms());
        carousel.apply(&actions, Some(event));
    }
    reschedule(shared);
}

/// Keep one timeout armed for the core's earliest deadline.
fn reschedule(shared: &Rc<RefCell<Carousel>>) {
    let weak = Rc::downgrade(shared);
    let Ok(mut carousel) = shared.try_borrow_mut() else {
        return;
    };
    let Some(at) = carousel.core.next_deadline() else {
        carousel.timer = None;
        carousel.scheduled_at = None;
        return;
    };
    if carousel.scheduled_at == Some(at) && carousel.timer.is_some() {
        return;
    }
    carousel.scheduled_at = Some(at);
    carousel.timer = Some(Timeout::new(delay_ms(at - now_ms()), move || on_timeout(&weak)));
}

fn on_timeout(weak: &Weak<RefCell<Carousel>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    {
        let Ok(mut carousel) = shared.try_borrow_mut() else {
            return;
        };
        carousel.scheduled_at = None;
        let actions = carousel.core.tick(now_ms());
        carousel.apply(&actions, None);
    }
    reschedule(&shared);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn delay_ms(delta: f64) -> u32 {
    let delay = delta.max(0.0).ceil();
    if delay >= f64::from(u32::MAX) { u32::MAX } else { delay as u32 }
}

fn listen<F>(target: &EventTarget, kind: &'static str, passive: Option<bool>, handler: F) -> Result<Listener, HostError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    match passive {
        Some(passive) => {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
        }
        None => target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?,
    }
    Ok(Listener { target: target.clone(), kind, callback })
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn mouse_x(event: &Event) -> Option<f64> {
    event.dyn_ref::<MouseEvent>().map(|e| f64::from(e.client_x()))
}

/// Map a DOM event to an input event for one of the container listeners.
fn container_input(kind: &str, event: &Event) -> Option<InputEvent> {
    match kind {
        "touchstart" => touch_x(event).map(|x| InputEvent::PointerDown { source: PointerSource::Touch, x }),
        "touchmove" => touch_x(event).map(|x| InputEvent::PointerMove { source: PointerSource::Touch, x }),
        "touchend" | "touchcancel" => Some(InputEvent::PointerUp { source: PointerSource::Touch }),
        "mousedown" => mouse_x(event).map(|x| InputEvent::PointerDown { source: PointerSource::Mouse, x }),
        "mousemove" => mouse_x(event).map(|x| InputEvent::PointerMove { source: PointerSource::Mouse, x }),
        "mouseup" => Some(InputEvent::PointerUp { source: PointerSource::Mouse }),
        "mouseenter" => Some(InputEvent::PointerEnter),
        "mouseleave" => Some(InputEvent::PointerLeave),
        _ => None,
    }
}

/// Container events and whether each is registered passive.
const CONTAINER_EVENTS: [(&str, Option<bool>); 9] = [
    ("touchstart", Some(true)),
    ("touchmove", Some(false)),
    ("touchend", None),
    ("touchcancel", None),
    ("mousedown", None),
    ("mousemove", None),
    ("mouseup", None),
    ("mouseenter", None),
    ("mouseleave", None),
];

fn attach(shared: &Rc<RefCell<Carousel>>, document: &Document) -> Result<Vec<Listener>, HostError> {
    let carousel = shared.borrow();
    let mut listeners = Vec::new();

    let container: &EventTarget = carousel.container.as_ref();
    for (kind, passive) in CONTAINER_EVENTS {
        let shared = Rc::clone(shared);
        listeners.push(listen(container, kind, passive, move |event: Event| {
            if let Some(input) = container_input(kind, &event) {
                dispatch(&shared, input, &event);
            }
        })?);
    }

    if carousel.core.config().keyboard {
        let shared = Rc::clone(shared);
        listeners.push(listen(document.as_ref(), "keydown", None, move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                dispatch(&shared, InputEvent::KeyDown(Key(key)), &event);
            }
        })?);
    }

    for (side, arrow) in [(ArrowSide::Prev, carousel.prev.as_ref()), (ArrowSide::Next, carousel.next.as_ref())] {
        if let Some(arrow) = arrow {
            let shared = Rc::clone(shared);
            listeners.push(listen(arrow.as_ref(), "click", None, move |event: Event| {
                dispatch(&shared, InputEvent::ArrowActivated(side), &event);
            })?);
        }
    }

    for (index, info) in carousel.infos.iter().enumerate() {
        if let Some(info) = info {
            let shared = Rc::clone(shared);
            listeners.push(listen(info.as_ref(), "scroll", Some(true), move |event: Event| {
                dispatch(&shared, InputEvent::InfoScrolled { index }, &event);
            })?);
        }
    }

    Ok(listeners)
}

// =============================================================
// Mounting
// =============================================================

/// A mounted carousel. Dropping it tears the carousel down.
#[wasm_bindgen]
pub struct CarouselHandle {
    inner: Rc<RefCell<Carousel>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CarouselHandle {
    /// Detach every listener and cancel the pending timer.
    pub fn teardown(&mut self) {
        // Each listener detaches itself on drop.
        self.listeners.clear();
        if let Ok(mut carousel) = self.inner.try_borrow_mut() {
            carousel.core.teardown();
            carousel.timer = None;
            carousel.scheduled_at = None;
        }
    }

    /// Committed slide index, or `undefined` before placement / with no slides.
    #[wasm_bindgen(js_name = currentIndex)]
    #[must_use]
    pub fn current_index(&self) -> Option<u32> {
        let carousel = self.inner.borrow();
        carousel.core.current_index().map(|i| u32::try_from(i).unwrap_or(u32::MAX))
    }

    /// Number of attached DOM listeners.
    #[wasm_bindgen(js_name = listenerCount)]
    #[must_use]
    pub fn listener_count(&self) -> u32 {
        u32::try_from(self.listeners.len()).unwrap_or(u32::MAX)
    }

    pub fn advance(&self) {
        self.navigate(|core, now| core.advance(now));
    }

    pub fn retreat(&self) {
        self.navigate(|core, now| core.retreat(now));
    }
}

impl CarouselHandle {
    fn navigate(&self, step: impl FnOnce(&mut CarouselCore, f64) -> Vec<Action>) {
        {
            let Ok(mut carousel) = self.inner.try_borrow_mut() else {
                return;
            };
            let actions = step(&mut carousel.core, now_ms());
            carousel.apply(&actions, None);
        }
        reschedule(&self.inner);
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn query(document: &Document, selector: Option<&str>) -> Result<Option<Element>, HostError> {
    match selector {
        Some(selector) => Ok(document.query_selector(selector)?),
        None => Ok(None),
    }
}

fn build_slide(document: &Document, content: &SlideContent, config: &CarouselConfig) -> Result<HtmlElement, HostError> {
    let slide = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HostError::Dom("created element is not an HtmlElement".into()))?;
    slide.set_class_name("project-slide");
    slide.set_inner_html(&slide_markup(content, &config.detail_base));
    set_declarations(&slide, &SLIDE_DECLARATIONS)?;
    set_style(&slide, &SlideStyle::hidden())?;
    Ok(slide)
}

/// Mount a carousel on the first element matching `selector`.
///
/// Returns `Ok(None)` when no element matches: nothing is created, scheduled
/// or attached. With no slides the fallback message is written and the handle
/// carries no listeners.
///
/// # Errors
///
/// Returns [`HostError`] when there is no document or a DOM call fails.
pub fn mount(
    selector: &str,
    slides: Vec<SlideContent>,
    config: CarouselConfig,
) -> Result<Option<CarouselHandle>, HostError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(HostError::NoDocument)?;
    let Some(element) = document.query_selector(selector)? else {
        log::warn!("carousel: container {selector:?} not found; skipping");
        return Ok(None);
    };
    let Ok(container) = element.dyn_into::<HtmlElement>() else {
        log::warn!("carousel: container {selector:?} is not an HTML element; skipping");
        return Ok(None);
    };

    let prev = query(&document, config.prev_selector.as_deref())?;
    let next = query(&document, config.next_selector.as_deref())?;

    container.set_inner_html("");
    let mut views = Vec::with_capacity(slides.len());
    let mut infos = Vec::with_capacity(slides.len());
    for content in &slides {
        let view = build_slide(&document, content, &config)?;
        container.append_child(&view)?;
        infos.push(view.query_selector(".project-info")?);
        views.push(view);
    }

    let has_slides = !views.is_empty();
    if has_slides {
        set_declarations(&container, &CONTAINER_DECLARATIONS)?;
        container.style().set_property("cursor", "grab")?;
    }

    let shared = Rc::new(RefCell::new(Carousel {
        container,
        slides: views,
        infos,
        prev,
        next,
        core: CarouselCore::new(slides.len(), config),
        timer: None,
        scheduled_at: None,
    }));

    {
        let mut carousel = shared.borrow_mut();
        let actions = carousel.core.start(now_ms());
        carousel.apply(&actions, None);
    }

    let listeners = if has_slides { attach(&shared, &document)? } else { Vec::new() };
    reschedule(&shared);
    log::debug!("carousel: mounted {selector:?} with {} slides", slides.len());

    Ok(Some(CarouselHandle { inner: shared, listeners }))
}

// =============================================================
// JS exports
// =============================================================

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initCarousel)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("carousel: console logger already installed");
    }
}

/// Mount from JSON supplied by the page. Failures are logged, never thrown.
#[wasm_bindgen(js_name = mountCarousel)]
#[must_use]
pub fn mount_carousel(selector: &str, slides_json: &str, options_json: Option<String>) -> Option<CarouselHandle> {
    let result = parse_slides(slides_json)
        .map_err(HostError::from)
        .and_then(|slides| {
            let config = CarouselConfig::from_json(options_json.as_deref().unwrap_or(""))?;
            mount(selector, slides, config)
        });
    match result {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("carousel: {selector:?} not mounted: {err}");
            None
        }
    }
}
