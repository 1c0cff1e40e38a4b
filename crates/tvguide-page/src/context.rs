//! Read-only per-process page configuration.

use std::path::PathBuf;

use crate::labels::Labels;
use crate::render::template::{CONTENT_TEMPLATE, PAGE_TEMPLATE, TemplateSource};

/// Configuration the page core consumes, built once at startup.
///
/// Enumerates exactly the recognized fields; shared read-only across
/// requests.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Base URL for static assets referenced by the templates.
    pub static_url: String,
    /// Directory with template overrides; `None` uses the built-in
    /// templates compiled into this crate.
    pub templates: Option<PathBuf>,
    /// Localized display strings.
    pub labels: Labels,
}

impl PageContext {
    /// Template source for the content view stage.
    #[must_use]
    pub fn content_template(&self) -> TemplateSource {
        match &self.templates {
            Some(dir) => TemplateSource::File(dir.join("program_list.html")),
            None => TemplateSource::Builtin(CONTENT_TEMPLATE),
        }
    }

    /// Template source for the page chrome stage.
    #[must_use]
    pub fn page_template(&self) -> TemplateSource {
        match &self.templates {
            Some(dir) => TemplateSource::File(dir.join("page.html")),
            None => TemplateSource::Builtin(PAGE_TEMPLATE),
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            static_url: String::from("/static"),
            templates: None,
            labels: Labels::default(),
        }
    }
}
