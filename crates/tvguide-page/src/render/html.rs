//! HTML fragment builders for the content view slots.

use crate::date::{human_date, iso_date};
use crate::labels::Labels;
use crate::listing::{ChannelGroup, ProgramEntry, ProgramListing};
use crate::navigation::NavigationBar;

/// Escapes text for HTML element and attribute content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the date navigation bar.
///
/// Previous/next anchors are enabled only while a stored range exists and
/// the step stays inside it; otherwise they render as disabled spans. The
/// "return to today" anchor appears only when a custom date is active.
pub(crate) fn navigation_bar(bar: &NavigationBar, labels: &Labels) -> String {
    let mut out = String::from("<nav class=\"navigation-bar\">\n");

    let prev = bar
        .selected_date
        .pred_opt()
        .filter(|_| bar.range.is_some_and(|r| r.first < bar.selected_date));
    match prev {
        Some(date) => out.push_str(&format!(
            "  <a class=\"prev\" href=\"/date/{}\">&laquo; {}</a>\n",
            iso_date(date),
            escape(&labels.previous_day),
        )),
        None => out.push_str(&format!(
            "  <span class=\"prev disabled\">&laquo; {}</span>\n",
            escape(&labels.previous_day),
        )),
    }

    out.push_str(&format!(
        "  <strong class=\"selected-date\">{}</strong>\n",
        human_date(bar.selected_date),
    ));

    if bar.custom_date_active {
        out.push_str(&format!(
            "  <a class=\"today\" href=\"/\">{}</a>\n",
            escape(&labels.today),
        ));
    }

    let next = bar
        .selected_date
        .succ_opt()
        .filter(|_| bar.range.is_some_and(|r| bar.selected_date < r.last));
    match next {
        Some(date) => out.push_str(&format!(
            "  <a class=\"next\" href=\"/date/{}\">{} &raquo;</a>\n",
            iso_date(date),
            escape(&labels.next_day),
        )),
        None => out.push_str(&format!(
            "  <span class=\"next disabled\">{} &raquo;</span>\n",
            escape(&labels.next_day),
        )),
    }

    out.push_str("</nav>");
    out
}

/// Renders the jump links to each channel group section.
pub(crate) fn group_index(groups: &[ChannelGroup]) -> String {
    let mut out = String::from("<ul class=\"group-index\">\n");
    for (idx, group) in groups.iter().enumerate() {
        out.push_str(&format!(
            "  <li><a href=\"#group-{idx}\">{}</a></li>\n",
            escape(&group.name),
        ));
    }
    out.push_str("</ul>");
    out
}

/// Renders the grouped per-channel program lists.
///
/// Group order governs display order; a channel absent from the listing
/// (or present with an empty list) renders its placeholder text.
pub(crate) fn program_lists(
    listing: &ProgramListing,
    groups: &[ChannelGroup],
    static_url: &str,
    labels: &Labels,
) -> String {
    let mut out = String::new();

    for (idx, group) in groups.iter().enumerate() {
        out.push_str(&format!(
            "<section class=\"channel-group\" id=\"group-{idx}\">\n<h2>{}</h2>\n",
            escape(&group.name),
        ));

        for channel in &group.channels {
            out.push_str(&format!(
                "<div class=\"channel\">\n<h3><img class=\"channel-logo\" src=\"{}/logos/{}.png\" alt=\"\"> {}</h3>\n",
                escape(static_url),
                channel.id,
                escape(&channel.name),
            ));

            let programs = listing
                .get(&channel.id)
                .map_or(&[] as &[ProgramEntry], |v| v.as_slice());
            if programs.is_empty() {
                out.push_str(&format!(
                    "<p class=\"no-programs\">{}</p>\n",
                    escape(&labels.no_programs),
                ));
            } else {
                out.push_str("<ul class=\"programs\">\n");
                for program in programs {
                    out.push_str(&format!(
                        "  <li><time>{}</time> <span class=\"title\">{}</span>",
                        escape(&program.start_time),
                        escape(&program.title),
                    ));
                    if let Some(description) = &program.description {
                        out.push_str(&format!(
                            " <span class=\"description\">{}</span>",
                            escape(description),
                        ));
                    }
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }

            out.push_str("</div>\n");
        }

        out.push_str("</section>\n");
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::listing::{GuideChannel, ProgramEntry};
    use crate::navigation::DateRange;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(first: NaiveDate, last: NaiveDate) -> Option<DateRange> {
        Some(DateRange { first, last })
    }

    #[test]
    fn test_escape() {
        // Arrange & Act & Assert
        assert_eq!(escape("a & b <c>"), "a &amp; b &lt;c&gt;");
        assert_eq!(escape("\"x\"'y'"), "&quot;x&quot;&#39;y&#39;");
    }

    #[test]
    fn test_navigation_bar_inside_range() {
        // Arrange
        let bar = NavigationBar::new(
            day(2024, 3, 15),
            false,
            range(day(2024, 1, 1), day(2024, 3, 20)),
        );

        // Act
        let html = navigation_bar(&bar, &Labels::default());

        // Assert
        assert!(html.contains("href=\"/date/2024-03-14\""));
        assert!(html.contains("href=\"/date/2024-03-16\""));
        assert!(html.contains("15.3.2024"));
        assert!(!html.contains("class=\"today\""));
    }

    #[test]
    fn test_navigation_bar_without_range_is_disabled() {
        // Arrange
        let bar = NavigationBar::new(day(2024, 3, 15), false, None);

        // Act
        let html = navigation_bar(&bar, &Labels::default());

        // Assert
        assert!(html.contains("prev disabled"));
        assert!(html.contains("next disabled"));
        assert!(!html.contains("/date/"));
    }

    #[test]
    fn test_navigation_bar_custom_date_offers_today() {
        // Arrange
        let bar = NavigationBar::new(
            day(2024, 3, 15),
            true,
            range(day(2024, 1, 1), day(2024, 3, 20)),
        );

        // Act
        let html = navigation_bar(&bar, &Labels::default());

        // Assert
        assert!(html.contains("class=\"today\" href=\"/\""));
    }

    #[test]
    fn test_navigation_bar_at_range_edges() {
        // Arrange
        let bar = NavigationBar::new(
            day(2024, 1, 1),
            true,
            range(day(2024, 1, 1), day(2024, 3, 20)),
        );

        // Act
        let html = navigation_bar(&bar, &Labels::default());

        // Assert: no step before the earliest stored date
        assert!(html.contains("prev disabled"));
        assert!(html.contains("href=\"/date/2024-01-02\""));
    }

    #[test]
    fn test_program_lists_renders_groups_and_placeholders() {
        // Arrange
        let groups = vec![ChannelGroup {
            name: String::from("National"),
            channels: vec![
                GuideChannel {
                    id: 1,
                    name: String::from("Channel1"),
                },
                GuideChannel {
                    id: 2,
                    name: String::from("Channel2"),
                },
            ],
        }];
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

        // Act
        let html = program_lists(&listing, &groups, "/static", &Labels::default());

        // Assert
        assert!(html.contains("<h2>National</h2>"));
        assert!(html.contains("Evening News"));
        assert!(html.contains("<time>18:30</time>"));
        assert!(html.contains("/static/logos/1.png"));
        // Channel2 has no programs on this date
        assert!(html.contains("No programs"));
    }

    #[test]
    fn test_program_lists_escapes_titles() {
        // Arrange
        let groups = vec![ChannelGroup {
            name: String::from("National"),
            channels: vec![GuideChannel {
                id: 1,
                name: String::from("Channel1"),
            }],
        }];
        let mut listing: ProgramListing = BTreeMap::new();
        listing.insert(
            1,
            vec![ProgramEntry {
                start_time: String::from("18:30"),
                end_time: None,
                title: String::from("Cats & <Dogs>"),
                description: None,
            }],
        );

        // Act
        let html = program_lists(&listing, &groups, "/static", &Labels::default());

        // Assert
        assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
    }

    #[test]
    fn test_group_index_links_sections() {
        // Arrange
        let groups = vec![
            ChannelGroup {
                name: String::from("National"),
                channels: vec![],
            },
            ChannelGroup {
                name: String::from("Regional"),
                channels: vec![],
            },
        ];

        // Act
        let html = group_index(&groups);

        // Assert
        assert!(html.contains("href=\"#group-0\""));
        assert!(html.contains("href=\"#group-1\""));
        assert!(html.contains("Regional"));
    }
}
