//! Slide content: the read-only records a carousel is built from.
//!
//! The data collaborator decides what goes into `meta` and `links`; the
//! carousel only renders them in order. Records arrive as JSON from the page
//! (see [`crate::host`]) or are built directly by the server-side catalog.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    /// Stable identifier, used only to build the detail-page link.
    pub id: String,
    /// Headline shown in the info block.
    pub title: String,
    /// One-line description under the title.
    #[serde(default)]
    pub tagline: String,
    /// Image shown in the media container.
    #[serde(default)]
    pub media_url: String,
    /// Ordered label/value rows.
    #[serde(default)]
    pub meta: Vec<MetaField>,
    /// Outbound links rendered as buttons.
    #[serde(default)]
    pub links: Vec<ActionLink>,
}

/// A labelled row in the info block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaField {
    pub label: String,
    pub value: MetaValue,
}

/// Value of a [`MetaField`]: either plain text or a list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Tags(Vec<String>),
}

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

impl MetaField {
    #[must_use]
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: MetaValue::Text(value.into()) }
    }

    #[must_use]
    pub fn tags<I, S>(label: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { label: label.into(), value: MetaValue::Tags(tags.into_iter().map(Into::into).collect()) }
    }
}

impl SlideContent {
    /// Link to the detail page for this record, e.g. `project-template.html?id=project1`.
    #[must_use]
    pub fn detail_href(&self, base: &str) -> String {
        format!("{base}?id={}", encode_query_value(&self.id))
    }
}

/// Parse a JSON array of slides as supplied by the page.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the payload is not an array
/// of slide records.
pub fn parse_slides(json: &str) -> Result<Vec<SlideContent>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Percent-encode a query value. Unreserved characters pass through.
fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
