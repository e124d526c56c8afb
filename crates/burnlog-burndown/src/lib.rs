//! Burndown snapshot engine.
//!
//! Turns a board's current lists and cards into a per-list story-point
//! snapshot and merges it into the board's date-indexed chart history:
//!
//! board-list config → fetch → [`BoardSnapshotBuilder`] → [`SnapshotHistory::merge`] → chart file

pub mod aggregate;
pub mod chart;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod orchestrator;
pub mod snapshot;

pub use aggregate::ListAggregator;
pub use chart::ChartFile;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BoardEntry, BoardListConfig};
pub use error::{BoardError, ConfigError, HistoryError, StaleSnapshot};
pub use history::{MergeOutcome, SnapshotHistory};
pub use orchestrator::{BoardFailure, BoardSuccess, BurndownOrchestrator, RunReport};
pub use snapshot::{BoardSnapshotBuilder, Snapshot, DATE_FIELD};
