use burnlog_core::{sorted_by_position, BoardList, Card};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::aggregate::ListAggregator;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Key holding the day of a serialized snapshot. A board list with this
/// name cannot be stored.
pub const DATE_FIELD: &str = "date";

/// Story points per list name on one calendar day.
///
/// Serialized as a flat mapping: `date` first, then list names in the
/// board's display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(flatten)]
    pub list_totals: IndexMap<String, u64>,
}

impl Snapshot {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            list_totals: IndexMap::new(),
        }
    }

    pub fn total(&self, list_name: &str) -> Option<u64> {
        self.list_totals.get(list_name).copied()
    }

    /// Points across every list.
    pub fn points(&self) -> u64 {
        self.list_totals.values().sum()
    }
}

/// Builds a [`Snapshot`] from one fetch of a board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardSnapshotBuilder {
    aggregator: ListAggregator,
}

impl BoardSnapshotBuilder {
    pub fn new(aggregator: ListAggregator) -> Self {
        Self { aggregator }
    }

    /// Every list gets an entry, including empty ones. Lists sharing a name
    /// collapse into one bucket at the first list's position.
    pub fn build(&self, date: Date, lists: &[BoardList], cards: &[Card]) -> Snapshot {
        let mut snapshot = Snapshot::new(date);
        for list in sorted_by_position(lists, |l| l.position) {
            let total = self.aggregator.aggregate(&list.id, cards);
            *snapshot.list_totals.entry(list.name.clone()).or_insert(0) += total;
        }
        snapshot
    }
}
