//! Rendering: slide view markup and the inline styles for each visual state.
//!
//! Everything here is pure. The host turns a [`SlideStyle`] into
//! `style.setProperty` calls and assigns the markup to `innerHTML` once per
//! slide; no other module builds CSS or HTML strings.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::{CarouselConfig, TransitionStyle};
use crate::content::{MetaValue, SlideContent};
use crate::engine::Direction;

/// Stacking order of the current and incoming slides.
const Z_FRONT: &str = "2";
/// Stacking order of hidden and outgoing slides.
const Z_BACK: &str = "1";

/// Inline style for one slide in one visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStyle {
    pub transform: String,
    pub opacity: &'static str,
    pub transition: String,
    pub visibility: &'static str,
    pub pointer_events: &'static str,
    pub z_index: &'static str,
}

impl SlideStyle {
    /// Hidden rest: not painted and not hit-testable.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            transform: translate("0"),
            opacity: "0",
            transition: "none".into(),
            visibility: "hidden",
            pointer_events: "none",
            z_index: Z_BACK,
        }
    }

    /// Visible rest with no animation; used for initial placement.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            transform: translate("0"),
            opacity: "1",
            transition: "none".into(),
            visibility: "visible",
            pointer_events: "auto",
            z_index: Z_FRONT,
        }
    }

    /// Incoming slide parked at its entry edge with transitions disabled.
    #[must_use]
    pub fn staged(direction: Direction, style: TransitionStyle) -> Self {
        Self {
            transform: translate(entry_offset(direction, style)),
            opacity: "0",
            transition: "none".into(),
            visibility: "visible",
            pointer_events: "none",
            z_index: Z_FRONT,
        }
    }

    /// Incoming slide animating to rest.
    #[must_use]
    pub fn entering(config: &CarouselConfig) -> Self {
        Self {
            transform: translate("0"),
            opacity: "1",
            transition: transition_property(config),
            visibility: "visible",
            pointer_events: "auto",
            z_index: Z_FRONT,
        }
    }

    /// Outgoing slide animating toward the opposite edge.
    #[must_use]
    pub fn leaving(direction: Direction, config: &CarouselConfig) -> Self {
        Self {
            transform: translate(exit_offset(direction, config.transition)),
            opacity: "0",
            transition: transition_property(config),
            visibility: "visible",
            pointer_events: "none",
            z_index: Z_BACK,
        }
    }

    /// `(property, value)` pairs in the order the host should apply them.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &str); 6] {
        [
            ("transition", self.transition.as_str()),
            ("transform", self.transform.as_str()),
            ("opacity", self.opacity),
            ("visibility", self.visibility),
            ("pointer-events", self.pointer_events),
            ("z-index", self.z_index),
        ]
    }
}

/// Container layout: slides overlap so they can cross without reflow.
pub const CONTAINER_DECLARATIONS: [(&str, &str); 3] =
    [("position", "relative"), ("overflow", "hidden"), ("touch-action", "pan-y")];

/// Base layout applied once to every slide view.
pub const SLIDE_DECLARATIONS: [(&str, &str); 4] =
    [("position", "absolute"), ("top", "0"), ("left", "0"), ("width", "100%")];

fn translate(offset: &str) -> String {
    format!("translateX({offset})")
}

fn entry_offset(direction: Direction, style: TransitionStyle) -> &'static str {
    match (style, direction) {
        (TransitionStyle::Crossfade, _) => "0",
        (TransitionStyle::Slide, Direction::Forward) => "100%",
        (TransitionStyle::Slide, Direction::Backward) => "-100%",
    }
}

fn exit_offset(direction: Direction, style: TransitionStyle) -> &'static str {
    match (style, direction) {
        (TransitionStyle::Crossfade, _) => "0",
        (TransitionStyle::Slide, Direction::Forward) => "-100%",
        (TransitionStyle::Slide, Direction::Backward) => "100%",
    }
}

fn transition_property(config: &CarouselConfig) -> String {
    let ms = config.transition_ms.round();
    match config.transition {
        TransitionStyle::Slide => format!("transform {ms}ms ease, opacity {ms}ms ease"),
        TransitionStyle::Crossfade => format!("opacity {ms}ms ease"),
    }
}

// =============================================================
// Markup
// =============================================================

/// Inner HTML of one slide view.
#[must_use]
pub fn slide_markup(slide: &SlideContent, detail_base: &str) -> String {
    let title = escape_html(&slide.title);
    let mut out = String::new();

    out.push_str("<div class=\"project-gif-container\">");
    out.push_str(&format!(
        "<a href=\"{}\" aria-label=\"View project details for {title}\">",
        escape_html(&slide.detail_href(detail_base))
    ));
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{title} Demo\" class=\"project-gif\" draggable=\"false\">",
        escape_html(&slide.media_url)
    ));
    out.push_str("</a></div>");

    out.push_str("<div class=\"project-info\">");
    out.push_str(&format!("<h3>{title}</h3>"));
    out.push_str(&format!("<p>{}</p>", escape_html(&slide.tagline)));

    out.push_str("<div class=\"project-meta\">");
    for field in &slide.meta {
        out.push_str(&format!("<div class=\"meta-item\"><h4>{}</h4>", escape_html(&field.label)));
        match &field.value {
            MetaValue::Text(text) => out.push_str(&format!("<p>{}</p>", escape_html(text))),
            MetaValue::Tags(tags) => {
                out.push_str("<div class=\"meta-tags\">");
                for tag in tags {
                    out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
                }
                out.push_str("</div>");
            }
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    out.push_str("<div class=\"project-links\">");
    for link in &slide.links {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"project-details-btn\">{}</a>",
            escape_html(&link.url),
            escape_html(&link.label)
        ));
    }
    out.push_str("</div></div>");

    out
}

/// Markup written into the container when there are no slides.
#[must_use]
pub fn fallback_markup(message: &str) -> String {
    format!("<p class=\"carousel-empty\">{}</p>", escape_html(message))
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
