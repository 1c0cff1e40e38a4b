//! Program listing and channel grouping models.

use std::collections::BTreeMap;

/// Per-channel program lists for one calendar date.
///
/// Channel ID maps to the channel's programs in broadcast order.
/// Constructed fresh per request and discarded after rendering; an empty
/// map (or a channel with an empty list) is a valid, non-error state.
pub type ProgramListing = BTreeMap<u32, Vec<ProgramEntry>>;

/// A single program as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEntry {
    /// Start time of day (`HH:MM`).
    pub start_time: String,
    /// End time of day (`HH:MM`, when known).
    pub end_time: Option<String>,
    /// Program title.
    pub title: String,
    /// Program description (when known).
    pub description: Option<String>,
}

/// A channel as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideChannel {
    /// Channel ID.
    pub id: u32,
    /// Channel display name.
    pub name: String,
}

/// An ordered, named group of channels.
///
/// Supplied by the channel repository in display order; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGroup {
    /// Group display name.
    pub name: String,
    /// Channels in display order.
    pub channels: Vec<GuideChannel>,
}
