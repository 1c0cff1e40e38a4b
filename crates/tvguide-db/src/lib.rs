//! Database module for stored TV guide data.
//!
//! Uses `rusqlite` (bundled `SQLite`) to store channel groups, channels,
//! and broadcast programs served to the page renderer.

/// Channel and channel group CRUD operations.
pub mod channels;
mod connection;
mod migrations;
/// Program CRUD and date-keyed queries.
pub mod programs;

#[allow(clippy::module_name_repetitions)]
pub use channels::{load_channel_groups, load_channels, save_channel_groups, save_channels};
#[allow(clippy::module_name_repetitions)]
pub use connection::open_db;
#[allow(clippy::module_name_repetitions)]
pub use programs::{insert_programs, load_program_lists_by_date, stored_program_date_range};
