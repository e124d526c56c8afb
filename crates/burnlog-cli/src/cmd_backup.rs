use std::path::Path;

use burnlog_store::StorePaths;
use burnlog_trello::{backup_board, load_backup, restore_board};

use crate::render;

/// `burnlog backup create`
pub fn create(config: Option<&Path>, paths: &StorePaths, board_id: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    let path = backup_board(&client, paths, board_id)?;
    println!("Backed up board {board_id} to {}", path.display());
    Ok(())
}

/// `burnlog backup list`
pub fn list(paths: &StorePaths) -> anyhow::Result<()> {
    let ids = paths.list_backups()?;
    if ids.is_empty() {
        println!("(no backups in {})", paths.backup_dir.display());
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}

/// `burnlog backup show`
pub fn show(paths: &StorePaths, board_id: &str, show_descriptions: bool) -> anyhow::Result<()> {
    let board = load_backup(paths, board_id)?;
    print!("{}", render::backup_tree(&board, show_descriptions));
    Ok(())
}

/// `burnlog backup restore`
pub fn restore(
    config: Option<&Path>,
    paths: &StorePaths,
    board_id: &str,
    target: &str,
) -> anyhow::Result<()> {
    let board = load_backup(paths, board_id)?;
    let client = crate::connect(config)?;
    let summary = restore_board(&client, &board, target)?;
    println!(
        "Restored {} lists, {} cards, {} checklists ({} items) onto board {target}",
        summary.lists, summary.cards, summary.checklists, summary.items
    );
    Ok(())
}
