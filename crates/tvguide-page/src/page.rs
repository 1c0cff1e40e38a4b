//! Request orchestration: date → data → composed page.

use chrono::{Local, NaiveDate};

use crate::context::PageContext;
use crate::date::{human_date, iso_date, resolve_date_with_today};
use crate::error::PageError;
use crate::navigation::NavigationBar;
use crate::render::{Renderable, compose_program_page};
use crate::repository::{ChannelRepository, ProgramRepository};

/// Resolves a requested date and composes the program listing page.
///
/// `raw_date` absent means "today" as observed by the system clock.
///
/// # Errors
///
/// Returns [`PageError::NotFound`] for an unparseable date and
/// [`PageError::Data`] when a repository fails. Nothing is rendered in
/// either case.
pub fn render_program_page(
    programs: &impl ProgramRepository,
    channels: &impl ChannelRepository,
    raw_date: Option<&str>,
    ctx: &PageContext,
) -> Result<Renderable, PageError> {
    render_program_page_with_today(programs, channels, raw_date, Local::now().date_naive(), ctx)
}

/// [`render_program_page`] with an injected "today" for the clock.
///
/// Resolution, aggregation, and composition run strictly sequentially;
/// the repositories are the only collaborators touched.
///
/// # Errors
///
/// See [`render_program_page`].
pub fn render_program_page_with_today(
    programs: &impl ProgramRepository,
    channels: &impl ChannelRepository,
    raw_date: Option<&str>,
    today: NaiveDate,
    ctx: &PageContext,
) -> Result<Renderable, PageError> {
    let date = resolve_date_with_today(raw_date, today)?;
    let custom_date_active = raw_date.is_some();

    let page_title = format!("{} {}", ctx.labels.tv_programs, human_date(date));

    // One canonical key for both the explicit-date and "today" paths.
    let date_key = iso_date(date);
    let program_lists = programs
        .program_lists_by_date(&date_key)
        .map_err(PageError::Data)?;
    let range = programs.stored_date_range().map_err(PageError::Data)?;
    let groups = channels.channel_groups().map_err(PageError::Data)?;

    let navigation_bar = NavigationBar::new(date, custom_date_active, range);

    tracing::debug!(
        date = %date_key,
        custom_date_active,
        channels = program_lists.len(),
        "composing program page"
    );

    Ok(compose_program_page(
        &page_title,
        navigation_bar,
        program_lists,
        groups,
        ctx,
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use anyhow::Result;
    use chrono::NaiveDate;

    use super::*;
    use crate::listing::{ChannelGroup, GuideChannel, ProgramEntry, ProgramListing};
    use crate::navigation::DateRange;

    /// Mock program repository recording the query keys it receives.
    struct MockPrograms {
        listing: ProgramListing,
        range: Option<DateRange>,
        queried_dates: RefCell<Vec<String>>,
    }

    impl MockPrograms {
        fn new(listing: ProgramListing, range: Option<DateRange>) -> Self {
            Self {
                listing,
                range,
                queried_dates: RefCell::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self::new(BTreeMap::new(), None)
        }
    }

    impl ProgramRepository for MockPrograms {
        fn program_lists_by_date(&self, date: &str) -> Result<ProgramListing> {
            self.queried_dates.borrow_mut().push(String::from(date));
            Ok(self.listing.clone())
        }

        fn stored_date_range(&self) -> Result<Option<DateRange>> {
            Ok(self.range)
        }
    }

    struct MockChannels {
        groups: Vec<ChannelGroup>,
    }

    impl ChannelRepository for MockChannels {
        fn channel_groups(&self) -> Result<Vec<ChannelGroup>> {
            Ok(self.groups.clone())
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_fixture() -> (MockPrograms, MockChannels) {
        let mut listing: ProgramListing = BTreeMap::new();
        listing.insert(
            1,
            vec![ProgramEntry {
                start_time: String::from("18:30"),
                end_time: None,
                title: String::from("Evening News"),
                description: None,
            }],
        );
        let programs = MockPrograms::new(
            listing,
            Some(DateRange {
                first: day(2024, 1, 1),
                last: day(2024, 3, 20),
            }),
        );
        let channels = MockChannels {
            groups: vec![ChannelGroup {
                name: String::from("National"),
                channels: vec![GuideChannel {
                    id: 1,
                    name: String::from("Channel1"),
                }],
            }],
        };
        (programs, channels)
    }

    #[test]
    fn test_default_today_page() {
        // Arrange
        let (programs, channels) = march_fixture();
        let ctx = PageContext::default();

        // Act
        let renderable = render_program_page_with_today(
            &programs,
            &channels,
            None,
            day(2024, 3, 15),
            &ctx,
        )
        .unwrap();
        let output = renderable.render().unwrap();

        // Assert: title carries the label and the human date
        assert_eq!(renderable.page_title(), Some("TV-programs 15.3.2024"));
        assert!(output.contains("TV-programs 15.3.2024"));
        assert!(output.contains("Evening News"));
        // Default "today" path: no return-to-today affordance
        assert!(!output.contains("class=\"today\""));
        // Inside the stored range, both steps are live
        assert!(output.contains("href=\"/date/2024-03-14\""));
        assert!(output.contains("href=\"/date/2024-03-16\""));
    }

    #[test]
    fn test_today_and_explicit_date_share_query_key() {
        // Arrange
        let (programs, channels) = march_fixture();
        let ctx = PageContext::default();

        // Act
        render_program_page_with_today(&programs, &channels, None, day(2024, 3, 15), &ctx)
            .unwrap();
        render_program_page_with_today(
            &programs,
            &channels,
            Some("2024-03-15"),
            day(2000, 1, 1),
            &ctx,
        )
        .unwrap();

        // Assert: identical canonical keys regardless of path taken
        let queried = programs.queried_dates.borrow();
        assert_eq!(queried.as_slice(), ["2024-03-15", "2024-03-15"]);
    }

    #[test]
    fn test_invalid_date_is_not_found() {
        // Arrange
        let (programs, channels) = march_fixture();
        let ctx = PageContext::default();

        // Act
        let result = render_program_page_with_today(
            &programs,
            &channels,
            Some("2024-02-30"),
            day(2024, 3, 15),
            &ctx,
        );

        // Assert: terminal, nothing fetched or rendered
        assert!(matches!(result, Err(PageError::NotFound { .. })));
        assert!(programs.queried_dates.borrow().is_empty());
    }

    #[test]
    fn test_date_outside_range_renders_empty_listing() {
        // Arrange
        let (_, channels) = march_fixture();
        let programs = MockPrograms::new(
            BTreeMap::new(),
            Some(DateRange {
                first: day(2024, 1, 1),
                last: day(2024, 3, 20),
            }),
        );
        let ctx = PageContext::default();

        // Act
        let renderable = render_program_page_with_today(
            &programs,
            &channels,
            Some("2030-01-01"),
            day(2024, 3, 15),
            &ctx,
        )
        .unwrap();
        let output = renderable.render().unwrap();

        // Assert: valid page, custom date active, empty channel section
        assert_eq!(renderable.page_title(), Some("TV-programs 1.1.2030"));
        assert!(output.contains("class=\"today\""));
        assert!(output.contains("No programs"));
    }

    #[test]
    fn test_no_stored_data_at_all() {
        // Arrange
        let programs = MockPrograms::empty();
        let channels = MockChannels { groups: Vec::new() };
        let ctx = PageContext::default();

        // Act
        let renderable =
            render_program_page_with_today(&programs, &channels, None, day(2024, 3, 15), &ctx)
                .unwrap();
        let output = renderable.render().unwrap();

        // Assert: renders with disabled navigation affordances
        assert!(output.contains("prev disabled"));
        assert!(output.contains("next disabled"));
    }

    #[test]
    fn test_repository_failure_surfaces_as_data_error() {
        // Arrange
        struct FailingPrograms;
        impl ProgramRepository for FailingPrograms {
            fn program_lists_by_date(&self, _date: &str) -> Result<ProgramListing> {
                anyhow::bail!("connection lost")
            }
            fn stored_date_range(&self) -> Result<Option<DateRange>> {
                anyhow::bail!("connection lost")
            }
        }
        let channels = MockChannels { groups: Vec::new() };
        let ctx = PageContext::default();

        // Act
        let result = render_program_page_with_today(
            &FailingPrograms,
            &channels,
            None,
            day(2024, 3, 15),
            &ctx,
        );

        // Assert
        assert!(matches!(result, Err(PageError::Data(_))));
    }
}
