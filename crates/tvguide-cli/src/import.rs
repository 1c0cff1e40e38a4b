//! JSON import of channel groups, channels, and programs.
//!
//! A data-loading utility so the repositories have something to serve;
//! broadcast feed formats are out of scope.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Deserialize;

use tvguide_db::channels::{StoredChannel, StoredChannelGroup};
use tvguide_db::programs::StoredProgram;
use tvguide_db::{insert_programs, save_channel_groups, save_channels};

/// Import document root.
#[derive(Debug, Deserialize)]
pub struct ImportDocument {
    /// Channel groups with their channels, in display order.
    #[serde(default)]
    pub groups: Vec<ImportGroup>,
    /// Programs across all channels.
    #[serde(default)]
    pub programs: Vec<ImportProgram>,
}

/// A channel group in the import document.
#[derive(Debug, Deserialize)]
pub struct ImportGroup {
    /// Channel group ID.
    pub id: u32,
    /// Group display name.
    pub name: String,
    /// Display order for sorting.
    #[serde(default)]
    pub sort_order: u32,
    /// Channels in display order.
    #[serde(default)]
    pub channels: Vec<ImportChannel>,
}

/// A channel in the import document.
#[derive(Debug, Deserialize)]
pub struct ImportChannel {
    /// Channel ID.
    pub id: u32,
    /// Channel display name.
    pub name: String,
}

/// A program in the import document.
#[derive(Debug, Deserialize)]
pub struct ImportProgram {
    /// Channel ID the program airs on.
    pub ch_id: u32,
    /// Broadcast start time (`YYYY-MM-DD HH:MM:SS`).
    pub start_time: String,
    /// Broadcast end time (optional).
    pub end_time: Option<String>,
    /// Program title.
    pub title: String,
    /// Program description (optional).
    pub description: Option<String>,
}

/// Loads an import document into the database.
///
/// Channel data is replaced wholesale; programs are inserted fresh (the
/// replace of the channel tables clears them first).
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a database
/// write fails.
pub fn run_import(conn: &Connection, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document: ImportDocument = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let groups: Vec<StoredChannelGroup> = document
        .groups
        .iter()
        .map(|g| StoredChannelGroup {
            group_id: g.id,
            name: g.name.clone(),
            sort_order: g.sort_order,
        })
        .collect();

    let mut channels: Vec<StoredChannel> = Vec::new();
    for group in &document.groups {
        for (position, ch) in group.channels.iter().enumerate() {
            let sort_order =
                u32::try_from(position).context("channel position exceeds u32 range")?;
            channels.push(StoredChannel {
                ch_id: ch.id,
                group_id: Some(group.id),
                name: ch.name.clone(),
                sort_order,
            });
        }
    }

    let programs: Vec<StoredProgram> = document
        .programs
        .iter()
        .map(|p| StoredProgram {
            ch_id: p.ch_id,
            start_time: p.start_time.clone(),
            end_time: p.end_time.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
        })
        .collect();

    save_channel_groups(conn, &groups).context("failed to save channel groups")?;
    save_channels(conn, &channels).context("failed to save channels")?;
    let inserted = insert_programs(conn, &programs).context("failed to insert programs")?;

    tracing::info!(
        groups = groups.len(),
        channels = channels.len(),
        programs = inserted,
        "import complete"
    );

    Ok(())
}
