//! Project catalog: the records behind both sliders and the detail pages.
//!
//! DESIGN
//! ======
//! The catalog is loaded once at startup from a YAML file and is read-only
//! afterwards, so it is shared behind an `Arc` without locking. Ids are
//! validated up front: every detail link a slide builds must resolve to
//! exactly one record.

pub mod record;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use carousel::content::SlideContent;
use serde::{Deserialize, Serialize};

pub use record::{ProjectKind, ProjectRecord};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{kind} project #{position} has an empty id")]
    EmptyId { kind: ProjectKind, position: usize },
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub coding: Vec<ProjectRecord>,
    pub non_coding: Vec<ProjectRecord>,
}

impl Catalog {
    /// Read and validate the catalog file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read, is not valid
    /// YAML for this shape, or fails id validation.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml(&raw)
    }

    /// Parse and validate catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed YAML, an empty id, or an id used twice.
    pub fn from_yaml(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let catalog: Self = serde_yaml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for kind in [ProjectKind::Coding, ProjectKind::NonCoding] {
            for (position, record) in self.records(kind).iter().enumerate() {
                let id = record.id.as_str();
                if id.trim().is_empty() {
                    return Err(CatalogError::EmptyId { kind, position });
                }
                if !seen.insert(id) {
                    return Err(CatalogError::DuplicateId(id.to_string()));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn records(&self, kind: ProjectKind) -> &[ProjectRecord] {
        match kind {
            ProjectKind::Coding => &self.coding,
            ProjectKind::NonCoding => &self.non_coding,
        }
    }

    /// Slides for one slider, in catalog order.
    #[must_use]
    pub fn slides(&self, kind: ProjectKind) -> Vec<SlideContent> {
        self.records(kind).iter().map(|record| record.to_slide(kind)).collect()
    }

    /// Look a record up by id: coding projects first, then non-coding.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.coding.iter().chain(&self.non_coding).find(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coding.len() + self.non_coding.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
