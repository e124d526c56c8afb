//! Console output. Pure functions so the formats can be tested directly.

use burnlog_burndown::RunReport;
use burnlog_core::{sorted_by_position, Board, BoardList, Card, Checklist};

/// One list name per line, in display order.
pub fn list_names(lists: &[BoardList]) -> String {
    let mut out = String::new();
    for list in sorted_by_position(lists, |l| l.position) {
        out.push_str(&format!("{}\n", list.name));
    }
    out
}

/// Card titles grouped by list, both in display order. List names are not
/// printed.
pub fn card_titles(lists: &[BoardList], cards: &[Card]) -> String {
    let mut out = String::new();
    for list in sorted_by_position(lists, |l| l.position) {
        let on_list = cards.iter().filter(|c| c.list_id == list.id);
        for card in sorted_by_position(on_list, |c| c.position) {
            out.push_str(&format!("{}\n", card.title));
        }
    }
    out
}

/// Checklist names in the order the service returned them.
pub fn checklist_names(checklists: &[Checklist]) -> String {
    let mut out = String::new();
    for checklist in checklists {
        out.push_str(&format!("{}\n", checklist.name));
    }
    out
}

/// Per-board outcome lines plus a summary line.
pub fn run_report(report: &RunReport) -> String {
    let mut out = String::new();
    for ok in &report.succeeded {
        out.push_str(&format!(
            "ok {} ({}) -> {} [{}]\n",
            ok.group,
            ok.board_id,
            ok.chart.display(),
            ok.outcome.as_str()
        ));
    }
    for failed in &report.failed {
        out.push_str(&format!(
            "FAILED {} ({}): {}\n",
            failed.group, failed.board_id, failed.error
        ));
    }
    out.push_str(&format!(
        "{}: {} of {} boards updated, {} failed\n",
        report.date,
        report.succeeded.len(),
        report.processed(),
        report.failed.len()
    ));
    out
}

/// Indented tree of a stored backup.
pub fn backup_tree(board: &Board, show_descriptions: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", board.name));
    for list in board.lists_in_order() {
        out.push_str(&format!("  {}\n", list.name));
        for card in board.cards_in_list(&list.id) {
            out.push_str(&format!("    {}\n", card.title));
            if show_descriptions && !card.description.is_empty() {
                for line in card.description.lines() {
                    out.push_str(&format!("      {line}\n"));
                }
            }
            for checklist in board.checklists_of(&card.id) {
                out.push_str(&format!("      {}\n", checklist.name));
                let items = sorted_by_position(&checklist.items, |i| i.position);
                for item in items {
                    let mark = if item.is_complete() { "x" } else { " " };
                    out.push_str(&format!("        [{mark}] {}\n", item.name));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnlog_burndown::{
        BoardError, BoardFailure, BoardSuccess, HistoryError, MergeOutcome, Snapshot,
    };
    use burnlog_core::{ChecklistItem, ItemState};
    use std::path::PathBuf;
    use time::macros::date;

    fn lists() -> Vec<BoardList> {
        vec![
            BoardList::new("l3", "Done Sprint 10", 36864.0),
            BoardList::new("l1", "Sprint Backlog", 16384.0),
            BoardList::new("l2", "Doing", 32768.0),
        ]
    }

    #[test]
    fn lists_in_position_order() {
        assert_eq!(list_names(&lists()), "Sprint Backlog\nDoing\nDone Sprint 10\n");
    }

    #[test]
    fn cards_grouped_by_list() {
        let cards = vec![
            Card::new("a", "(2) P2: Fill Doing column", "l2", 1.0),
            Card::new("b", "Waterline", "l1", 3.0),
            Card::new("c", "Sprint 3", "l1", 1.0),
            Card::new("d", "(3) P3: Fill Done columns", "l3", 1.0),
            Card::new("e", "(3) P1: Fill Backlog column", "l1", 2.0),
        ];
        assert_eq!(
            card_titles(&lists(), &cards),
            "Sprint 3\n(3) P1: Fill Backlog column\nWaterline\n(2) P2: Fill Doing column\n(3) P3: Fill Done columns\n"
        );
    }

    #[test]
    fn checklists_keep_service_order() {
        let mk = |name: &str| Checklist {
            id: name.into(),
            name: name.into(),
            card_id: "c".into(),
            items: vec![],
        };
        assert_eq!(
            checklist_names(&[mk("Tasks"), mk("Feedback"), mk("Tasks")]),
            "Tasks\nFeedback\nTasks\n"
        );
    }

    #[test]
    fn report_lists_successes_failures_and_summary() {
        let report = RunReport {
            date: date!(2024 - 01 - 01),
            succeeded: vec![BoardSuccess {
                group: "orange".into(),
                board_id: "b1".into(),
                chart: PathBuf::from("orange/burndown-data-01.yaml"),
                outcome: MergeOutcome::Appended,
                snapshot: Snapshot::new(date!(2024 - 01 - 01)),
            }],
            failed: vec![BoardFailure {
                group: "blue".into(),
                board_id: "b2".into(),
                error: BoardError::History(HistoryError::OutOfOrder {
                    path: PathBuf::from("blue/burndown-data-01.yaml"),
                    last: date!(2024 - 01 - 02),
                    incoming: date!(2024 - 01 - 01),
                }),
            }],
        };
        let text = run_report(&report);
        assert!(text.contains("ok orange (b1) -> orange/burndown-data-01.yaml [appended]\n"));
        assert!(text.contains(
            "FAILED blue (b2): blue/burndown-data-01.yaml left unchanged: snapshot for 2024-01-01"
        ));
        assert!(text.ends_with("2024-01-01: 1 of 2 boards updated, 1 failed\n"));
    }

    #[test]
    fn backup_tree_nests_cards_and_checklists() {
        let mut card = Card::new("c1", "(1) P1: Create board", "l1", 1.0);
        card.description = "first line\nsecond".into();
        let board = Board {
            id: "b".into(),
            name: "Sprint".into(),
            lists: vec![BoardList::new("l1", "Done Sprint 8", 1.0)],
            cards: vec![card],
            checklists: vec![Checklist {
                id: "k".into(),
                name: "Tasks".into(),
                card_id: "c1".into(),
                items: vec![
                    ChecklistItem {
                        name: "b".into(),
                        state: ItemState::Incomplete,
                        position: 2.0,
                    },
                    ChecklistItem {
                        name: "a".into(),
                        state: ItemState::Complete,
                        position: 1.0,
                    },
                ],
            }],
        };
        assert_eq!(
            backup_tree(&board, false),
            "Sprint\n  Done Sprint 8\n    (1) P1: Create board\n      Tasks\n        [x] a\n        [ ] b\n"
        );
        assert!(backup_tree(&board, true).contains("      first line\n      second\n"));
    }
}
