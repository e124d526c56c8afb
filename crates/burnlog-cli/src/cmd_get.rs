use std::path::Path;

use crate::render;

/// `burnlog get lists`
pub fn lists(config: Option<&Path>, board_id: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    let lists = client.lists(board_id)?;
    print!("{}", render::list_names(&lists));
    Ok(())
}

/// `burnlog get cards`
pub fn cards(config: Option<&Path>, board_id: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    let lists = client.lists(board_id)?;
    let cards = client.cards(board_id)?;
    print!("{}", render::card_titles(&lists, &cards));
    Ok(())
}

/// `burnlog get checklists`
pub fn checklists(config: Option<&Path>, board_id: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    let checklists = client.checklists(board_id)?;
    print!("{}", render::checklist_names(&checklists));
    Ok(())
}

/// `burnlog get description`
pub fn description(config: Option<&Path>, card_id: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    println!("{}", client.card_description(card_id)?);
    Ok(())
}

/// `burnlog get raw <path>`
pub fn raw(config: Option<&Path>, path: &str) -> anyhow::Result<()> {
    let client = crate::connect(config)?;
    let value = client.get_json(path)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
