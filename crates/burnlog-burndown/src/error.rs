use std::path::{Path, PathBuf};

use burnlog_core::FetchError;
use time::Date;

/// A chart file could not be read, parsed, merged into or written.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("malformed burndown history {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error(
        "{} left unchanged: snapshot for {incoming} is older than the last recorded day {last}",
        path.display()
    )]
    OutOfOrder {
        path: PathBuf,
        last: Date,
        incoming: Date,
    },

    #[error(
        "cannot write {}: a list named `date` on {date} collides with the date field",
        path.display()
    )]
    ReservedListName { path: PathBuf, date: Date },
}

/// A snapshot dated before the last entry of an in-memory history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("snapshot for {incoming} is older than the last recorded day {last}")]
pub struct StaleSnapshot {
    pub last: Date,
    pub incoming: Date,
}

impl StaleSnapshot {
    /// Attach the chart file the snapshot was meant for.
    pub fn at(self, path: &Path) -> HistoryError {
        HistoryError::OutOfOrder {
            path: path.to_path_buf(),
            last: self.last,
            incoming: self.incoming,
        }
    }
}

/// The board-list configuration is unusable. Fatal for the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board list not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("malformed board list {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("cannot read board list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single board was not updated. Other boards are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
