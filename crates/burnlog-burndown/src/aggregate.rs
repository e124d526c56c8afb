use burnlog_core::{Card, StoryPointParser};

/// Sums story points per list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAggregator {
    parser: StoryPointParser,
}

impl ListAggregator {
    pub fn new(parser: StoryPointParser) -> Self {
        Self { parser }
    }

    /// Total points of the cards on `list_id`. An empty list totals 0.
    pub fn aggregate(&self, list_id: &str, cards: &[Card]) -> u64 {
        cards
            .iter()
            .filter(|c| c.list_id == list_id)
            .map(|c| u64::from(self.parser.parse(&c.title)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("c1", "(3) P1: Fill Backlog column", "backlog", 1.0),
            Card::new("c2", "(5) P4: Read data", "backlog", 2.0),
            Card::new("c3", "Waterline", "backlog", 3.0),
            Card::new("c4", "(2) P2: Fill Doing column", "doing", 1.0),
        ]
    }

    #[test]
    fn sums_only_matching_list() {
        let agg = ListAggregator::default();
        assert_eq!(agg.aggregate("backlog", &cards()), 8);
        assert_eq!(agg.aggregate("doing", &cards()), 2);
    }

    #[test]
    fn order_does_not_matter() {
        let agg = ListAggregator::default();
        let mut reversed = cards();
        reversed.reverse();
        assert_eq!(
            agg.aggregate("backlog", &reversed),
            agg.aggregate("backlog", &cards())
        );
    }

    #[test]
    fn empty_inputs_total_zero() {
        let agg = ListAggregator::default();
        assert_eq!(agg.aggregate("backlog", &[]), 0);
        assert_eq!(agg.aggregate("done", &cards()), 0);
    }

    #[test]
    fn parser_default_counts_per_unestimated_card() {
        let agg = ListAggregator::new(StoryPointParser::with_default(1));
        assert_eq!(agg.aggregate("backlog", &cards()), 9);
    }
}
