//! Repository trait contracts for the data collaborators.

use anyhow::Result;

use crate::listing::{ChannelGroup, ProgramListing};
use crate::navigation::DateRange;

/// Program data collaborator.
///
/// Abstracts the persistence layer for mock substitution in tests.
/// Implementations must be stateless per call; the page core invokes them
/// strictly sequentially within one request.
pub trait ProgramRepository {
    /// Returns the per-channel program lists for a calendar date.
    ///
    /// `date` is the canonical ISO key (`YYYY-MM-DD`). An empty listing
    /// is a valid, non-error result.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data fetch fails.
    fn program_lists_by_date(&self, date: &str) -> Result<ProgramListing>;

    /// Reports the earliest and latest dates with stored program data.
    ///
    /// `None` when no program data exists at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data fetch fails.
    fn stored_date_range(&self) -> Result<Option<DateRange>>;
}

/// Channel data collaborator.
pub trait ChannelRepository {
    /// Returns the channel groups in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data fetch fails.
    fn channel_groups(&self) -> Result<Vec<ChannelGroup>>;
}
