//! Program CRUD and date-keyed queries.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;

/// A stored broadcast program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProgram {
    /// Channel ID (FK → `channels.ch_id`).
    pub ch_id: u32,
    /// Broadcast start time (`YYYY-MM-DD HH:MM:SS`).
    pub start_time: String,
    /// Broadcast end time (nullable).
    pub end_time: Option<String>,
    /// Program title.
    pub title: String,
    /// Program description (nullable).
    pub description: Option<String>,
}

/// Inserts programs. Returns the number of rows inserted.
///
/// # Errors
///
/// Returns an error if the database operation fails.
#[allow(clippy::module_name_repetitions)]
pub fn insert_programs(conn: &Connection, programs: &[StoredProgram]) -> Result<usize> {
    let tx = conn
        .unchecked_transaction()
        .context("failed to begin transaction")?;

    let mut stmt = tx
        .prepare(
            "INSERT INTO programs (ch_id, start_time, end_time, title, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .context("failed to prepare programs insert")?;

    let mut inserted: usize = 0;
    for p in programs {
        let rows = stmt
            .execute(rusqlite::params![
                p.ch_id,
                p.start_time,
                p.end_time,
                p.title,
                p.description,
            ])
            .with_context(|| format!("failed to insert program {:?}", p.title))?;
        inserted = inserted.saturating_add(rows);
    }

    drop(stmt);
    tx.commit().context("failed to commit programs insert")?;
    Ok(inserted)
}

/// Loads the per-channel program lists for a calendar date.
///
/// `date` is the canonical ISO form (`YYYY-MM-DD`); rows match on
/// `date(start_time)`. Programs are ordered by `start_time` within each
/// channel. Channels without programs on the date are absent from the map.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn load_program_lists_by_date(
    conn: &Connection,
    date: &str,
) -> Result<BTreeMap<u32, Vec<StoredProgram>>> {
    let mut stmt = conn
        .prepare(
            "SELECT ch_id, start_time, end_time, title, description
             FROM programs
             WHERE date(start_time) = ?1
             ORDER BY ch_id, start_time",
        )
        .context("failed to prepare programs query")?;

    let rows = stmt
        .query_map([date], |row| {
            Ok(StoredProgram {
                ch_id: row.get(0)?,
                start_time: row.get(1)?,
                end_time: row.get(2)?,
                title: row.get(3)?,
                description: row.get(4)?,
            })
        })
        .context("failed to query programs")?;

    let mut lists: BTreeMap<u32, Vec<StoredProgram>> = BTreeMap::new();
    for row in rows {
        let program = row.context("failed to read programs row")?;
        lists.entry(program.ch_id).or_default().push(program);
    }

    tracing::debug!(date, channels = lists.len(), "loaded program lists");

    Ok(lists)
}

/// Reports the earliest and latest calendar dates with stored programs.
///
/// Returns `None` when the `programs` table is empty; absence is reported
/// as such rather than through a sentinel date.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timestamp
/// does not carry a valid date component.
pub fn stored_program_date_range(conn: &Connection) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let (first, last): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT MIN(date(start_time)), MAX(date(start_time)) FROM programs",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .context("failed to query stored program date range")?;

    match (first, last) {
        (Some(first), Some(last)) => {
            let first = NaiveDate::parse_from_str(&first, "%Y-%m-%d")
                .with_context(|| format!("invalid stored date: {first}"))?;
            let last = NaiveDate::parse_from_str(&last, "%Y-%m-%d")
                .with_context(|| format!("invalid stored date: {last}"))?;
            Ok(Some((first, last)))
        }
        _ => Ok(None),
    }
}
