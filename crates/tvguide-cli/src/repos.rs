//! Rusqlite-backed adapters for the page repository traits.

use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::Connection;

use tvguide_db::channels::{StoredChannel, StoredChannelGroup};
use tvguide_db::programs::StoredProgram;
use tvguide_db::{
    load_channel_groups, load_channels, load_program_lists_by_date, stored_program_date_range,
};
use tvguide_page::listing::{ChannelGroup, GuideChannel, ProgramEntry, ProgramListing};
use tvguide_page::navigation::DateRange;
use tvguide_page::repository::{ChannelRepository, ProgramRepository};

/// Program repository over a `SQLite` connection.
#[derive(Debug)]
pub struct SqlitePrograms<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePrograms<'a> {
    /// Wraps a connection.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ProgramRepository for SqlitePrograms<'_> {
    fn program_lists_by_date(&self, date: &str) -> Result<ProgramListing> {
        let stored = load_program_lists_by_date(self.conn, date)?;
        Ok(stored
            .into_iter()
            .map(|(ch_id, programs)| {
                (
                    ch_id,
                    programs.iter().map(to_program_entry).collect::<Vec<_>>(),
                )
            })
            .collect())
    }

    fn stored_date_range(&self) -> Result<Option<DateRange>> {
        Ok(stored_program_date_range(self.conn)?.map(|(first, last)| DateRange { first, last }))
    }
}

/// Channel repository over a `SQLite` connection.
#[derive(Debug)]
pub struct SqliteChannels<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteChannels<'a> {
    /// Wraps a connection.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ChannelRepository for SqliteChannels<'_> {
    fn channel_groups(&self) -> Result<Vec<ChannelGroup>> {
        let groups = load_channel_groups(self.conn)?;
        let channels = load_channels(self.conn)?;
        Ok(build_groups(&groups, &channels))
    }
}

/// Converts a stored program row to a listing entry.
///
/// Stored timestamps carry the full `YYYY-MM-DD HH:MM:SS`; the listing
/// shows time of day only. A timestamp that does not parse is shown as-is.
fn to_program_entry(program: &StoredProgram) -> ProgramEntry {
    ProgramEntry {
        start_time: time_of_day(&program.start_time),
        end_time: program.end_time.as_deref().map(time_of_day),
        title: program.title.clone(),
        description: program.description.clone(),
    }
}

/// Extracts `HH:MM` from a stored timestamp.
fn time_of_day(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").map_or_else(
        |_| String::from(timestamp),
        |dt| dt.format("%H:%M").to_string(),
    )
}

/// Assembles display groups from stored rows.
///
/// Group order comes from the stored sort order; channels keep their
/// within-group order. Ungrouped channels are not shown.
fn build_groups(groups: &[StoredChannelGroup], channels: &[StoredChannel]) -> Vec<ChannelGroup> {
    groups
        .iter()
        .map(|group| ChannelGroup {
            name: group.name.clone(),
            channels: channels
                .iter()
                .filter(|ch| ch.group_id == Some(group.group_id))
                .map(|ch| GuideChannel {
                    id: ch.ch_id,
                    name: ch.name.clone(),
                })
                .collect(),
        })
        .collect()
}
