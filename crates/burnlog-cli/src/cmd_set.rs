use std::io::Read;
use std::path::Path;

/// `burnlog set description`: new text comes from stdin.
pub fn description(config: Option<&Path>, card_id: &str) -> anyhow::Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let text = text.trim_end_matches(['\r', '\n']);

    let client = crate::connect(config)?;
    client.set_card_description(card_id, text)?;
    tracing::info!(card_id, chars = text.chars().count(), "description updated");
    Ok(())
}
