//! Template loading and `{{slot}}` substitution.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::TemplateError;

/// Built-in content view template.
pub const CONTENT_TEMPLATE: &str = include_str!("../../templates/program_list.html");

/// Built-in page chrome template.
pub const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Where a template's text comes from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Default template compiled into the crate.
    Builtin(&'static str),
    /// Template file on disk, read at render time.
    File(PathBuf),
}

impl TemplateSource {
    /// Loads the template text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] when a file source cannot be read.
    pub fn text(&self) -> Result<Cow<'static, str>, TemplateError> {
        match self {
            Self::Builtin(text) => Ok(Cow::Borrowed(text)),
            Self::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| TemplateError::Read {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Substitutes `{{slot}}` placeholders from the bound values.
///
/// Slot names are trimmed, so `{{ title }}` and `{{title}}` are
/// equivalent. Unbound values are harmless; an unbound *placeholder* is a
/// composition failure. A `{{` without a closing `}}` is kept literally.
///
/// # Errors
///
/// Returns [`TemplateError::UnresolvedSlot`] when the template references
/// a slot absent from `slots`.
pub fn fill(template: &str, slots: &BTreeMap<&str, String>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut parts = template.split("{{");

    if let Some(head) = parts.next() {
        out.push_str(head);
    }

    for part in parts {
        let Some((name, tail)) = part.split_once("}}") else {
            out.push_str("{{");
            out.push_str(part);
            continue;
        };

        let name = name.trim();
        match slots.get(name) {
            Some(value) => out.push_str(value),
            None => {
                return Err(TemplateError::UnresolvedSlot {
                    slot: String::from(name),
                });
            }
        }
        out.push_str(tail);
    }

    Ok(out)
}
