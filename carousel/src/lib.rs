//! Project carousel for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a slider: translating raw DOM input into navigation,
//! gating navigation while a transition is in flight, running autoplay, and
//! emitting the style changes that animate one slide out and the next one in.
//! All timing and state live in [`engine::CarouselCore`], which never touches
//! the DOM and is driven by an injected clock; [`host`] is the thin browser
//! binding around it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Navigation state machine, deadlines, and the emitted [`engine::Action`]s |
//! | [`input`] | Input event types and the swipe/drag gesture tracker |
//! | [`config`] | Per-instance tuning parsed from page-supplied JSON |
//! | [`content`] | Slide records rendered into each view |
//! | [`render`] | Inline style states and slide markup |
//! | [`host`] | DOM listeners, timers, and the `mountCarousel` export |
//! | [`consts`] | Default timings, thresholds, and class names |

pub mod config;
pub mod consts;
pub mod content;
pub mod engine;
pub mod host;
pub mod input;
pub mod render;
