use serde::{Deserialize, Serialize};

/// A list (column) on a board.
///
/// `name` is the burndown aggregation key. Names are not guaranteed unique
/// by the service; lists sharing a name land in the same bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
    pub position: f64,
    #[serde(default)]
    pub closed: bool,
}

/// A colored label attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: Option<String>,
}

/// A card as fetched at run time. The title may carry a `(N) ` point prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub list_id: String,
    pub position: f64,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub checklist_ids: Vec<String>,
}

impl Card {
    /// Minimal card, as used by the burndown engine.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        list_id: impl Into<String>,
        position: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            list_id: list_id.into(),
            position,
            labels: Vec::new(),
            description: String::new(),
            checklist_ids: Vec::new(),
        }
    }
}

impl BoardList {
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            closed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub state: ItemState,
    pub position: f64,
}

impl ChecklistItem {
    pub fn is_complete(&self) -> bool {
        self.state == ItemState::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub card_id: String,
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn items_total(&self) -> usize {
        self.items.len()
    }

    pub fn items_complete(&self) -> usize {
        self.items.iter().filter(|i| i.is_complete()).count()
    }
}

/// A whole board as returned by a full-board fetch (used by backups).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub lists: Vec<BoardList>,
    pub cards: Vec<Card>,
    pub checklists: Vec<Checklist>,
}

impl Board {
    /// Open lists in display order.
    pub fn lists_in_order(&self) -> Vec<&BoardList> {
        sorted_by_position(self.lists.iter().filter(|l| !l.closed), |l| l.position)
    }

    /// Cards of one list in display order.
    pub fn cards_in_list(&self, list_id: &str) -> Vec<&Card> {
        sorted_by_position(
            self.cards.iter().filter(|c| c.list_id == list_id),
            |c| c.position,
        )
    }

    pub fn checklists_of(&self, card_id: &str) -> Vec<&Checklist> {
        self.checklists
            .iter()
            .filter(|c| c.card_id == card_id)
            .collect()
    }
}

/// Stable sort by the service's floating `pos` field.
pub fn sorted_by_position<'a, T, I, F>(items: I, pos: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    let mut v: Vec<&T> = items.into_iter().collect();
    v.sort_by(|a, b| pos(*a).total_cmp(&pos(*b)));
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let mut closed = BoardList::new("l3", "Archive", 1.0);
        closed.closed = true;
        Board {
            id: "b1".into(),
            name: "Sprint".into(),
            lists: vec![
                BoardList::new("l2", "Doing", 200.0),
                BoardList::new("l1", "Backlog", 100.0),
                closed,
            ],
            cards: vec![
                Card::new("c2", "(2) second", "l1", 20.0),
                Card::new("c1", "(1) first", "l1", 10.0),
                Card::new("c3", "(5) other", "l2", 5.0),
            ],
            checklists: vec![Checklist {
                id: "k1".into(),
                name: "Tasks".into(),
                card_id: "c1".into(),
                items: vec![
                    ChecklistItem {
                        name: "a".into(),
                        state: ItemState::Complete,
                        position: 1.0,
                    },
                    ChecklistItem {
                        name: "b".into(),
                        state: ItemState::Incomplete,
                        position: 2.0,
                    },
                ],
            }],
        }
    }

    #[test]
    fn lists_in_order_skips_closed_and_sorts() {
        let b = board();
        let names: Vec<_> = b.lists_in_order().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Backlog", "Doing"]);
    }

    #[test]
    fn cards_in_list_sorted_by_position() {
        let b = board();
        let ids: Vec<_> = b.cards_in_list("l1").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert!(b.cards_in_list("missing").is_empty());
    }

    #[test]
    fn checklist_completion_counts() {
        let b = board();
        let lists = b.checklists_of("c1");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].items_total(), 2);
        assert_eq!(lists[0].items_complete(), 1);
        assert!(b.checklists_of("c2").is_empty());
    }
}
