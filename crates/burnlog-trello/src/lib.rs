//! Trello REST access for burnlog.
//!
//! [`TrelloClient`] is the blocking implementation of
//! [`burnlog_core::BoardClient`] plus the extra reads and writes the CLI
//! needs (descriptions, raw paths, backups, restore).

pub mod backup;
pub mod client;
pub mod settings;

pub use backup::{backup_board, load_backup, restore_board, BoardWriter, RestoreSummary};
pub use client::TrelloClient;
pub use settings::{Settings, SettingsError};
