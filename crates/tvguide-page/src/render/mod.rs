//! Two-stage render composition behind the [`Renderable`] abstraction.
//!
//! A content view binds listing data to the content template; a page
//! template wraps exactly one inner renderable with page chrome.
//! Composition is strictly two-level here.

mod html;
/// Template sources and slot substitution.
pub mod template;

use std::collections::BTreeMap;

use crate::context::PageContext;
use crate::error::TemplateError;
use crate::labels::Labels;
use crate::listing::{ChannelGroup, ProgramListing};
use crate::navigation::NavigationBar;
use crate::render::template::TemplateSource;

/// Data bag bound to the content view template.
#[derive(Debug, Clone)]
pub struct ContentData {
    /// Date navigation view model.
    pub navigation_bar: NavigationBar,
    /// Per-channel program lists for the selected date.
    pub program_lists: ProgramListing,
    /// Base URL for static assets.
    pub static_url: String,
    /// Reserved for the sibling radio-schedule mode; passed through the
    /// data bag unchanged. Always `false` from the TV entry point.
    pub radio: bool,
    /// Channel groups in display order.
    pub groups: Vec<ChannelGroup>,
}

/// Inner render stage: binds program/channel data to the content template.
#[derive(Debug, Clone)]
pub struct ContentView {
    template: TemplateSource,
    data: ContentData,
    labels: Labels,
}

impl ContentView {
    /// Binds a content template to its data bag.
    #[must_use]
    pub const fn new(template: TemplateSource, data: ContentData, labels: Labels) -> Self {
        Self {
            template,
            data,
            labels,
        }
    }

    fn render(&self) -> Result<String, TemplateError> {
        let text = self.template.text()?;

        let mut slots: BTreeMap<&str, String> = BTreeMap::new();
        slots.insert(
            "navigationBar",
            html::navigation_bar(&self.data.navigation_bar, &self.labels),
        );
        slots.insert(
            "programLists",
            html::program_lists(
                &self.data.program_lists,
                &self.data.groups,
                &self.data.static_url,
                &self.labels,
            ),
        );
        slots.insert("staticUrl", html::escape(&self.data.static_url));
        slots.insert("radio", self.data.radio.to_string());
        slots.insert("groups", html::group_index(&self.data.groups));

        template::fill(&text, &slots)
    }
}

/// Outer render stage: wraps one inner renderable with page chrome.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    template: TemplateSource,
    inner: Renderable,
    title: String,
    static_url: String,
}

impl PageTemplate {
    /// Wraps `inner` with the page chrome template.
    #[must_use]
    pub const fn new(
        template: TemplateSource,
        inner: Renderable,
        title: String,
        static_url: String,
    ) -> Self {
        Self {
            template,
            inner,
            title,
            static_url,
        }
    }

    fn render(&self) -> Result<String, TemplateError> {
        let content = self.inner.render()?;
        let text = self.template.text()?;

        let mut slots: BTreeMap<&str, String> = BTreeMap::new();
        slots.insert("title", html::escape(&self.title));
        slots.insert("content", content);
        slots.insert("staticUrl", html::escape(&self.static_url));

        template::fill(&text, &slots)
    }
}

/// Something that can produce final display output.
///
/// Closed set of variants; callers hold the outer value and never need to
/// know what it wraps.
#[derive(Debug, Clone)]
pub enum Renderable {
    /// A content view bound to its data.
    Content(ContentView),
    /// A page template wrapping exactly one inner renderable.
    Page(Box<PageTemplate>),
}

impl Renderable {
    /// Renders to the final output string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when a template cannot be read or
    /// references an unbound slot, in either stage. Terminal for the
    /// request; never retried.
    pub fn render(&self) -> Result<String, TemplateError> {
        match self {
            Self::Content(view) => view.render(),
            Self::Page(page) => page.render(),
        }
    }

    /// The page title, when the outer layer is a page template.
    #[must_use]
    pub fn page_title(&self) -> Option<&str> {
        match self {
            Self::Content(_) => None,
            Self::Page(page) => Some(&page.title),
        }
    }
}

/// Composes the program listing page.
///
/// Builds the content view from the aggregated data and wraps it in the
/// page template carrying `page_title` and the static asset base. The
/// returned value is always the outer page variant.
#[must_use]
pub fn compose_program_page(
    page_title: &str,
    navigation_bar: NavigationBar,
    program_lists: ProgramListing,
    groups: Vec<ChannelGroup>,
    ctx: &PageContext,
) -> Renderable {
    let view = ContentView::new(
        ctx.content_template(),
        ContentData {
            navigation_bar,
            program_lists,
            static_url: ctx.static_url.clone(),
            radio: false,
            groups,
        },
        ctx.labels.clone(),
    );

    Renderable::Page(Box::new(PageTemplate::new(
        ctx.page_template(),
        Renderable::Content(view),
        String::from(page_title),
        ctx.static_url.clone(),
    )))
}
