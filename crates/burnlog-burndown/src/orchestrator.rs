use std::path::{Path, PathBuf};

use burnlog_core::BoardClient;
use time::Date;

use crate::chart;
use crate::clock::Clock;
use crate::config::{BoardEntry, BoardListConfig};
use crate::error::{BoardError, HistoryError};
use crate::history::{MergeOutcome, SnapshotHistory};
use crate::snapshot::{BoardSnapshotBuilder, Snapshot};

/// A board whose chart was updated.
#[derive(Debug, Clone)]
pub struct BoardSuccess {
    pub group: String,
    pub board_id: String,
    pub chart: PathBuf,
    pub outcome: MergeOutcome,
    pub snapshot: Snapshot,
}

/// A board that was skipped; its chart is untouched.
#[derive(Debug)]
pub struct BoardFailure {
    pub group: String,
    pub board_id: String,
    pub error: BoardError,
}

/// Result of one batch run over a board list.
#[derive(Debug)]
pub struct RunReport {
    pub date: Date,
    pub succeeded: Vec<BoardSuccess>,
    pub failed: Vec<BoardFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn processed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Fetch → snapshot → merge → save, one board at a time.
///
/// A failing board is recorded and the run moves on; boards already
/// written stay written.
pub struct BurndownOrchestrator<C, K> {
    client: C,
    clock: K,
    builder: BoardSnapshotBuilder,
    output_base: PathBuf,
}

impl<C: BoardClient, K: Clock> BurndownOrchestrator<C, K> {
    pub fn new(client: C, clock: K) -> Self {
        Self {
            client,
            clock,
            builder: BoardSnapshotBuilder::default(),
            output_base: PathBuf::from("."),
        }
    }

    /// Directory that relative `output-directory` entries resolve against.
    pub fn with_output_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.output_base = base.into();
        self
    }

    pub fn with_builder(mut self, builder: BoardSnapshotBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn run(&self, config: &BoardListConfig) -> RunReport {
        let date = self.clock.today();
        let mut report = RunReport {
            date,
            succeeded: Vec::new(),
            failed: Vec::new(),
        };
        tracing::info!(%date, boards = config.len(), "starting burndown run");

        for (group, entry) in config.iter() {
            match self.process_board(date, group, entry) {
                Ok(success) => {
                    tracing::info!(
                        group,
                        board_id = %entry.board_id,
                        chart = %success.chart.display(),
                        outcome = success.outcome.as_str(),
                        "updated burndown chart"
                    );
                    report.succeeded.push(success);
                }
                Err(error) => {
                    tracing::warn!(group, board_id = %entry.board_id, %error, "board skipped");
                    report.failed.push(BoardFailure {
                        group: group.to_string(),
                        board_id: entry.board_id.clone(),
                        error,
                    });
                }
            }
        }
        report
    }

    fn output_dir(&self, entry: &BoardEntry) -> PathBuf {
        // absolute entries replace the base
        self.output_base.join(&entry.output_directory)
    }

    fn process_board(
        &self,
        date: Date,
        group: &str,
        entry: &BoardEntry,
    ) -> Result<BoardSuccess, BoardError> {
        let lists = self.client.fetch_lists(&entry.board_id)?;
        let cards = self.client.fetch_cards(&entry.board_id)?;
        tracing::debug!(
            board_id = %entry.board_id,
            lists = lists.len(),
            cards = cards.len(),
            "fetched board"
        );
        let snapshot = self.builder.build(date, &lists, &cards);

        let dir = self.output_dir(entry);
        let chart = chart::latest_chart(&dir).map_err(|source| HistoryError::Read {
            path: dir.clone(),
            source,
        })?;
        let outcome = merge_into_chart(&chart.path, snapshot.clone())?;

        Ok(BoardSuccess {
            group: group.to_string(),
            board_id: entry.board_id.clone(),
            chart: chart.path,
            outcome,
            snapshot,
        })
    }
}

/// Read-modify-write of one chart file.
pub fn merge_into_chart(path: &Path, snapshot: Snapshot) -> Result<MergeOutcome, HistoryError> {
    let mut history = SnapshotHistory::load(path)?;
    let outcome = history.merge(snapshot).map_err(|stale| stale.at(path))?;
    history.save(path)?;
    Ok(outcome)
}
