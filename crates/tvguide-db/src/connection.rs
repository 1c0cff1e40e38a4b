//! Database connection management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations::run_migrations;

/// Opens the guide database and brings its schema up to date.
///
/// The file is `{dir}/tvguide.db` when a directory override is given,
/// otherwise `tvguide/tvguide.db` under the user data directory
/// (`$XDG_DATA_HOME`, falling back to `~/.local/share`). Created on
/// first use. Foreign keys are enforced so programs cannot reference
/// channels that were removed by a re-import.
///
/// # Errors
///
/// Returns an error if no data directory can be determined, the database
/// cannot be opened, or a migration fails.
pub fn open_db(dir: Option<&PathBuf>) -> Result<Connection> {
    let db_path = match dir {
        Some(d) => d.join("tvguide.db"),
        None => user_data_dir()?.join("tvguide.db"),
    };

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open guide database {}", db_path.display()))?;

    conn.pragma_update(None, "foreign_keys", true)
        .context("failed to enable foreign key enforcement")?;

    run_migrations(&conn)
        .with_context(|| format!("failed to migrate guide database {}", db_path.display()))?;

    Ok(conn)
}

/// Per-user data directory for the guide database.
fn user_data_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return Ok(Path::new(&xdg).join("tvguide"));
    }

    let home = std::env::var("HOME").context("neither XDG_DATA_HOME nor HOME is set")?;
    Ok(Path::new(&home)
        .join(".local")
        .join("share")
        .join("tvguide"))
}
