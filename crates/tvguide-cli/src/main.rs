//! tvguide - TV schedule page renderer CLI.

/// Application configuration (TOML).
mod config;
/// JSON import into the local database.
mod import;
/// Repository adapters over the local database.
mod repos;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::AppConfig;
use crate::import::run_import;
use crate::repos::{SqliteChannels, SqlitePrograms};
use tvguide_db::{open_db, stored_program_date_range};
use tvguide_page::date::iso_date;
use tvguide_page::{PageError, render_program_page};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Schedule page operations.
    Page(PageCommand),
    /// Local database operations.
    Db(DbCommand),
}

/// Arguments for the `page` subcommand.
#[derive(clap::Args)]
struct PageCommand {
    /// Page subcommand to run.
    #[command(subcommand)]
    command: PageSubcommands,
}

/// Available page subcommands.
#[derive(Subcommand)]
enum PageSubcommands {
    /// Render the schedule page for a date.
    Render(RenderArgs),
    /// Report the navigable date range of stored data.
    Range,
}

/// Arguments for the `page render` subcommand.
#[derive(clap::Args)]
struct RenderArgs {
    /// Calendar date to render (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Write the page to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Arguments for the `db` subcommand.
#[derive(clap::Args)]
struct DbCommand {
    /// Db subcommand to run.
    #[command(subcommand)]
    command: DbSubcommands,
}

/// Available database subcommands.
#[derive(Subcommand)]
enum DbSubcommands {
    /// Import channel groups, channels, and programs from a JSON file.
    Import(ImportArgs),
}

/// Arguments for the `db import` subcommand.
#[derive(clap::Args)]
struct ImportArgs {
    /// JSON file to import.
    #[arg(long, required = true)]
    file: PathBuf,
}

/// Runs the `page render` subcommand.
///
/// An unparseable `--date` is the not-found condition: nothing is
/// composed and the process exits with failure.
///
/// # Errors
///
/// Returns an error if config or DB access fails, the date is not found,
/// or template composition fails.
#[instrument(skip_all)]
fn run_page_render(args: &RenderArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = AppConfig::load_for_dir(dir).context("failed to load config")?;
    let ctx = config.page_context();

    let conn = open_db(dir).context("failed to open database")?;
    let programs = SqlitePrograms::new(&conn);
    let channels = SqliteChannels::new(&conn);

    let renderable = match render_program_page(&programs, &channels, args.date.as_deref(), &ctx) {
        Ok(renderable) => renderable,
        Err(PageError::NotFound { input }) => {
            tracing::error!(input, "requested date not found");
            anyhow::bail!("not found: no page for date {input:?}");
        }
        Err(err) => return Err(anyhow::Error::new(err).context("failed to compose page")),
    };

    let output = renderable.render().context("failed to render page")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                bytes = output.len(),
                path = %path.display(),
                "page written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write page to stdout")?;
        }
    }

    Ok(())
}

/// Runs the `page range` subcommand.
///
/// # Errors
///
/// Returns an error if DB access fails.
#[instrument(skip_all)]
fn run_page_range(dir: Option<&PathBuf>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;

    match stored_program_date_range(&conn).context("failed to query stored range")? {
        Some((first, last)) => {
            tracing::info!(
                "Programs stored from {} to {}",
                iso_date(first),
                iso_date(last)
            );
        }
        None => tracing::info!("No program data stored. Run `db import` first."),
    }

    Ok(())
}

/// Runs the `db import` subcommand.
///
/// # Errors
///
/// Returns an error if DB access or the import fails.
#[instrument(skip_all)]
fn run_db_import(args: &ImportArgs, dir: Option<&PathBuf>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;
    run_import(&conn, &args.file)
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
fn main() -> Result<()> {
    // Logs go to stderr so a rendered page on stdout stays clean.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Page(page) => match page.command {
            PageSubcommands::Render(args) => run_page_render(&args, cli.dir.as_ref()),
            PageSubcommands::Range => run_page_range(cli.dir.as_ref()),
        },
        Commands::Db(db) => match db.command {
            DbSubcommands::Import(args) => run_db_import(&args, cli.dir.as_ref()),
        },
    }
}
