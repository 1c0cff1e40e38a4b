//! Navigable date range and navigation bar view model.

use chrono::NaiveDate;

/// Inclusive bounds of the calendar dates with stored program data.
///
/// `first <= last` whenever a range exists; total absence of data is
/// modeled as `Option<DateRange>::None`, never a sentinel date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest navigable date.
    pub first: NaiveDate,
    /// Latest navigable date.
    pub last: NaiveDate,
}

/// View model for the date navigation bar.
///
/// Pure data; constructed once per request and consumed only by the
/// content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBar {
    /// The date whose listing is shown.
    pub selected_date: NaiveDate,
    /// Whether the user explicitly chose the date (vs. default "today").
    ///
    /// Controls whether the view offers a "return to today" affordance.
    pub custom_date_active: bool,
    /// The navigable range, absent when no program data is stored.
    pub range: Option<DateRange>,
}

impl NavigationBar {
    /// Assembles the navigation bar model.
    ///
    /// No validation: a `selected_date` outside `range` is a valid model
    /// and renders without error.
    #[must_use]
    pub const fn new(
        selected_date: NaiveDate,
        custom_date_active: bool,
        range: Option<DateRange>,
    ) -> Self {
        Self {
            selected_date,
            custom_date_active,
            range,
        }
    }
}
