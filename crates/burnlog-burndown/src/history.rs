//! Date-ordered burndown history of one chart file.
//!
//! On disk a chart is a YAML sequence of flat mappings:
//!
//! ```yaml
//! - date: 2024-01-01
//!   Sprint Backlog: 3
//!   Doing: 5
//!   Done: 0
//! ```
//!
//! Dates never decrease. Merging a snapshot for the last recorded day
//! replaces that entry; a later day is appended.

use std::path::Path;

use serde::Serialize;

use crate::error::{HistoryError, StaleSnapshot};
use crate::snapshot::{Snapshot, DATE_FIELD};

/// What [`SnapshotHistory::merge`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Appended,
    Replaced,
}

impl MergeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeOutcome::Appended => "appended",
            MergeOutcome::Replaced => "replaced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SnapshotHistory {
    entries: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries, rejecting decreasing dates.
    pub fn from_entries(entries: Vec<Snapshot>) -> Result<Self, String> {
        for pair in entries.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(format!(
                    "entry for {} follows later entry {}",
                    pair[1].date, pair[0].date
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the last entry when it is for the same day, append otherwise.
    ///
    /// Applying the same day's snapshot twice leaves exactly one entry for
    /// that day holding the latest values.
    pub fn merge(&mut self, snapshot: Snapshot) -> Result<MergeOutcome, StaleSnapshot> {
        if let Some(last) = self.entries.last_mut() {
            if last.date == snapshot.date {
                *last = snapshot;
                return Ok(MergeOutcome::Replaced);
            }
            if last.date > snapshot.date {
                return Err(StaleSnapshot {
                    last: last.date,
                    incoming: snapshot.date,
                });
            }
        }
        self.entries.push(snapshot);
        Ok(MergeOutcome::Appended)
    }

    /// Parse chart YAML. Blank text is an empty history.
    pub fn parse(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: Vec<Snapshot> = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        Self::from_entries(entries)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.entries)
    }

    /// Load a chart file. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content).map_err(|message| HistoryError::Format {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Write the whole history, replacing the file atomically.
    ///
    /// Nothing is written when an entry has a list named `date`, since the
    /// file could not be read back.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.list_totals.contains_key(DATE_FIELD))
        {
            return Err(HistoryError::ReservedListName {
                path: path.to_path_buf(),
                date: entry.date,
            });
        }
        let data = self.to_yaml().map_err(|e| HistoryError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        burnlog_store::write_atomic(path, data.as_bytes()).map_err(|e| HistoryError::Write {
            path: path.to_path_buf(),
            message: format!("{e:#}"),
        })
    }
}
