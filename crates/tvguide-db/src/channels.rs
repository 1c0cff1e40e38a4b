//! Channel and channel group CRUD operations.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// A stored channel group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChannelGroup {
    /// Channel group ID.
    pub group_id: u32,
    /// Group display name.
    pub name: String,
    /// Display order for sorting.
    pub sort_order: u32,
}

/// A stored channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChannel {
    /// Channel ID.
    pub ch_id: u32,
    /// Channel group ID (nullable for ungrouped channels).
    pub group_id: Option<u32>,
    /// Channel display name.
    pub name: String,
    /// Display order within the group.
    pub sort_order: u32,
}

/// Replaces all channel groups.
///
/// Programs and channels are cleared first to satisfy the FK chain
/// (programs.ch_id -> channels.ch_id -> channel_groups.group_id).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn save_channel_groups(conn: &Connection, groups: &[StoredChannelGroup]) -> Result<()> {
    let tx = conn
        .unchecked_transaction()
        .context("failed to begin transaction")?;

    tx.execute("DELETE FROM programs", [])
        .context("failed to clear programs (FK dependency)")?;

    tx.execute("DELETE FROM channels", [])
        .context("failed to clear channels (FK dependency)")?;

    tx.execute("DELETE FROM channel_groups", [])
        .context("failed to clear channel_groups")?;

    let mut stmt = tx
        .prepare("INSERT INTO channel_groups (group_id, name, sort_order) VALUES (?1, ?2, ?3)")
        .context("failed to prepare channel_groups insert")?;

    for g in groups {
        stmt.execute(rusqlite::params![g.group_id, g.name, g.sort_order])
            .with_context(|| format!("failed to insert channel_group {}", g.group_id))?;
    }

    drop(stmt);
    tx.commit().context("failed to commit channel_groups")?;
    Ok(())
}

/// Loads all channel groups, ordered by `sort_order`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn load_channel_groups(conn: &Connection) -> Result<Vec<StoredChannelGroup>> {
    let mut stmt = conn
        .prepare("SELECT group_id, name, sort_order FROM channel_groups ORDER BY sort_order")
        .context("failed to prepare channel_groups query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StoredChannelGroup {
                group_id: row.get(0)?,
                name: row.get(1)?,
                sort_order: row.get(2)?,
            })
        })
        .context("failed to query channel_groups")?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to read channel_groups rows")
}

/// Replaces all channels.
///
/// # Errors
///
/// Returns an error if the database operation fails.
#[allow(clippy::module_name_repetitions)]
pub fn save_channels(conn: &Connection, channels: &[StoredChannel]) -> Result<()> {
    let tx = conn
        .unchecked_transaction()
        .context("failed to begin transaction")?;

    tx.execute("DELETE FROM programs", [])
        .context("failed to clear programs (FK dependency)")?;

    tx.execute("DELETE FROM channels", [])
        .context("failed to clear channels")?;

    let mut stmt = tx
        .prepare("INSERT INTO channels (ch_id, group_id, name, sort_order) VALUES (?1, ?2, ?3, ?4)")
        .context("failed to prepare channels insert")?;

    for ch in channels {
        stmt.execute(rusqlite::params![ch.ch_id, ch.group_id, ch.name, ch.sort_order])
            .with_context(|| format!("failed to insert channel {}", ch.ch_id))?;
    }

    drop(stmt);
    tx.commit().context("failed to commit channels")?;
    Ok(())
}

/// Loads all channels, ordered by `sort_order` then `ch_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[allow(clippy::module_name_repetitions)]
pub fn load_channels(conn: &Connection) -> Result<Vec<StoredChannel>> {
    let mut stmt = conn
        .prepare("SELECT ch_id, group_id, name, sort_order FROM channels ORDER BY sort_order, ch_id")
        .context("failed to prepare channels query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StoredChannel {
                ch_id: row.get(0)?,
                group_id: row.get(1)?,
                name: row.get(2)?,
                sort_order: row.get(3)?,
            })
        })
        .context("failed to query channels")?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to read channels rows")
}
