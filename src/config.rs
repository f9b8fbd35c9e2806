//! Site configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_OWNER: &str = "Portfolio";
pub const DEFAULT_FALLBACK_PATH: &str = "/index.html";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub owner: String,
    pub fallback_path: String,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: static site root, default `<crate>/site`
    /// - `CATALOG_PATH`: default `<SITE_DIR>/data/projects.yaml`
    /// - `SITE_OWNER`: suffix of detail page titles, default `Portfolio`
    /// - `FALLBACK_PATH`: redirect target for unknown projects, default `/index.html`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let site_dir = get("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);
        let catalog_path = get("CATALOG_PATH").map_or_else(|| site_dir.join("data").join("projects.yaml"), PathBuf::from);
        let owner = get("SITE_OWNER").unwrap_or_else(|| DEFAULT_SITE_OWNER.to_string());
        let fallback_path = match get("FALLBACK_PATH") {
            Some(raw) => parse_fallback_path(raw)?,
            None => DEFAULT_FALLBACK_PATH.to_string(),
        };

        Ok(Self { port, site_dir, catalog_path, owner, fallback_path })
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site")
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>()
        .map_err(|e| ConfigError::Invalid { var: "PORT", value: raw.to_string(), reason: e.to_string() })
}

fn parse_fallback_path(raw: String) -> Result<String, ConfigError> {
    if raw.starts_with('/') {
        Ok(raw)
    } else {
        Err(ConfigError::Invalid { var: "FALLBACK_PATH", value: raw, reason: "must start with '/'".into() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
