//! Application configuration (TOML).
//!
//! Supplies the static asset base URL, optional template overrides, and
//! label overrides. Parsed once at startup; the core only ever sees the
//! resulting [`PageContext`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tvguide_page::PageContext;
use tvguide_page::labels::Labels;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Page rendering settings.
    #[serde(default)]
    pub page: PageSettings,
    /// Label overrides for localized display strings.
    #[serde(default)]
    pub labels: Labels,
}

/// Page rendering configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PageSettings {
    /// Base URL for static assets.
    #[serde(default = "default_static_url")]
    pub static_url: String,
    /// Directory with template overrides (omit for the built-ins).
    #[serde(default)]
    pub templates: Option<PathBuf>,
}

fn default_static_url() -> String {
    String::from("/static")
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            static_url: default_static_url(),
            templates: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration for a config/data directory override.
    ///
    /// Reads `{dir}/config.toml`, or `~/.config/tvguide/config.toml` when
    /// no override is given. A missing file yields the defaults, so a
    /// fresh install renders with the built-in templates and labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or
    /// the file exists but cannot be read or parsed.
    pub fn load_for_dir(dir: Option<&PathBuf>) -> Result<Self> {
        Self::read_from(&config_path(dir)?)
    }

    fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Builds the read-only page context handed to the core.
    #[must_use]
    pub fn page_context(&self) -> PageContext {
        PageContext {
            static_url: self.page.static_url.clone(),
            templates: self.page.templates.clone(),
            labels: self.labels.clone(),
        }
    }
}

/// Location of `config.toml` for the given directory override.
fn config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d.join("config.toml")),
        None => {
            let home = std::env::var("HOME").context("HOME environment variable is not set")?;
            Ok([home.as_str(), ".config", "tvguide", "config.toml"]
                .iter()
                .collect())
        }
    }
}
