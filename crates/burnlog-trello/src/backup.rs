//! Full-board backups and replaying them onto another board.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use burnlog_core::decode::decode_board;
use burnlog_core::{Board, Card, ClientError};
use burnlog_store::StorePaths;

use crate::client::TrelloClient;

/// The write side of the hosting service that a restore needs.
pub trait BoardWriter {
    /// Returns the id of the created list.
    fn create_list(&self, board_id: &str, name: &str, position: f64) -> Result<String, ClientError>;

    /// Returns the id of the created card.
    fn create_card(&self, list_id: &str, card: &Card) -> Result<String, ClientError>;

    /// Returns the id of the created checklist.
    fn create_checklist(&self, card_id: &str, name: &str) -> Result<String, ClientError>;

    fn create_check_item(
        &self,
        checklist_id: &str,
        name: &str,
        complete: bool,
    ) -> Result<(), ClientError>;
}

/// Counts of what a restore created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub lists: usize,
    pub cards: usize,
    pub checklists: usize,
    pub items: usize,
}

/// Fetch a board and store it under `backup/<board-id>/board.json`.
pub fn backup_board(
    client: &TrelloClient,
    paths: &StorePaths,
    board_id: &str,
) -> anyhow::Result<PathBuf> {
    let document = client
        .board_document(board_id)
        .with_context(|| format!("fetching board {board_id}"))?;
    // refuse to store something the restore could not read back
    decode_board(&document.to_string())
        .with_context(|| format!("board {board_id} returned an unexpected document"))?;
    let path = paths
        .write_backup(board_id, &document)
        .with_context(|| format!("writing backup for board {board_id}"))?;
    tracing::info!(board_id, path = %path.display(), "board backed up");
    Ok(path)
}

/// Read and decode a stored backup.
pub fn load_backup(paths: &StorePaths, board_id: &str) -> anyhow::Result<Board> {
    let text = paths.read_backup(board_id)?;
    decode_board(&text).with_context(|| {
        format!(
            "reading backup {}",
            paths.board_backup_file(board_id).display()
        )
    })
}

/// Recreate open lists, their cards, checklists and items on `target_board`.
///
/// Stops at the first failed request; anything created before it stays.
pub fn restore_board<W: BoardWriter + ?Sized>(
    writer: &W,
    backup: &Board,
    target_board: &str,
) -> Result<RestoreSummary, ClientError> {
    let mut summary = RestoreSummary::default();
    let mut list_ids: HashMap<&str, String> = HashMap::new();

    for list in backup.lists_in_order() {
        let id = writer.create_list(target_board, &list.name, list.position)?;
        list_ids.insert(list.id.as_str(), id);
        summary.lists += 1;
    }

    for list in backup.lists_in_order() {
        let Some(new_list) = list_ids.get(list.id.as_str()) else {
            continue;
        };
        for card in backup.cards_in_list(&list.id) {
            let new_card = writer.create_card(new_list, card)?;
            summary.cards += 1;
            for checklist in backup.checklists_of(&card.id) {
                let new_checklist = writer.create_checklist(&new_card, &checklist.name)?;
                summary.checklists += 1;
                let mut items: Vec<_> = checklist.items.iter().collect();
                items.sort_by(|a, b| a.position.total_cmp(&b.position));
                for item in items {
                    writer.create_check_item(&new_checklist, &item.name, item.is_complete())?;
                    summary.items += 1;
                }
            }
        }
    }

    tracing::info!(
        source = %backup.id,
        target = target_board,
        lists = summary.lists,
        cards = summary.cards,
        "board restored"
    );
    Ok(summary)
}
