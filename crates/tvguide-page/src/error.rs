//! Error taxonomy for page composition.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Template loading and slot substitution failures.
///
/// Always terminal for the request; template failures are not transient
/// and are never retried.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template file could not be read.
    #[error("failed to read template {path}")]
    Read {
        /// Path of the unreadable template file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A template referenced a slot with no bound value.
    #[error("template references unknown slot {{{{{slot}}}}}")]
    UnresolvedSlot {
        /// Name of the unresolved slot.
        slot: String,
    },
}

/// Failures the page boundary must distinguish.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested date string does not name a calendar date.
    ///
    /// The boundary surfaces this as its not-found response with no body;
    /// no partial rendering happens.
    #[error("no page for date input {input:?}")]
    NotFound {
        /// The raw date string as received.
        input: String,
    },
    /// Template composition failed in either pipeline stage.
    #[error("template composition failed")]
    Template(#[from] TemplateError),
    /// A repository collaborator failed.
    #[error("failed to load guide data")]
    Data(#[source] anyhow::Error),
}
