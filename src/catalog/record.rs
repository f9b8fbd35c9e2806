//! A single project entry and its presentation helpers.

use std::fmt;
use std::str::FromStr;

use carousel::content::{ActionLink, MetaField, SlideContent};
use serde::{Deserialize, Serialize};

/// Placeholder the catalog uses for "no link".
const NO_LINK: &str = "#";

/// Which slider a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Coding,
    NonCoding,
}

impl ProjectKind {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::NonCoding => "non-coding",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ProjectKind {
    type Err = UnknownKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "coding" => Ok(Self::Coding),
            "non-coding" => Ok(Self::NonCoding),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// One project as stored in the catalog file.
///
/// `description`, `skills` and `thanks` hold trusted HTML authored with the
/// site; every other string is plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub gif: String,
    pub code: String,
    pub technologies: Vec<String>,
    pub role: String,
    pub date: String,
    pub skills_used: Vec<String>,
    pub skills: String,
    pub thanks: String,
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl ProjectRecord {
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        non_blank(&self.role)
    }

    /// Source link, unless empty or the `#` placeholder.
    #[must_use]
    pub fn code_link(&self) -> Option<&str> {
        non_blank(&self.code).filter(|url| *url != NO_LINK)
    }

    #[must_use]
    pub fn thanks(&self) -> Option<&str> {
        non_blank(&self.thanks)
    }

    /// Label and tags for the detail page tag row: technologies first, then skills used.
    #[must_use]
    pub fn tag_row(&self) -> Option<(&'static str, &[String])> {
        if !self.technologies.is_empty() {
            Some(("Technologies", &self.technologies))
        } else if !self.skills_used.is_empty() {
            Some(("Skills", &self.skills_used))
        } else {
            None
        }
    }

    /// Carousel slide for this record as shown in the `kind` slider.
    #[must_use]
    pub fn to_slide(&self, kind: ProjectKind) -> SlideContent {
        let mut meta = Vec::new();
        let mut links = Vec::new();
        match kind {
            ProjectKind::Coding => {
                if let Some(role) = self.role() {
                    meta.push(MetaField::text("Role", role));
                }
                meta.push(MetaField::tags("Technologies", self.technologies.iter().cloned()));
                meta.push(MetaField::text("Date", &self.date));
                if let Some(url) = self.code_link() {
                    links.push(ActionLink { label: "View Code".into(), url: url.to_string() });
                }
            }
            ProjectKind::NonCoding => {
                meta.push(MetaField::tags("Skills", self.skills_used.iter().cloned()));
                meta.push(MetaField::text("Date", &self.date));
            }
        }
        SlideContent {
            id: self.id.clone(),
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            media_url: self.gif.clone(),
            meta,
            links,
        }
    }
}
