//! Typed decoding of the hosting service's JSON responses.
//!
//! Every remote payload passes through one of the `decode_*` functions
//! before the rest of the workspace sees it. Required fields are enforced
//! by the raw serde shapes below; a missing field fails the decode and
//! names the entity that was being read.

use serde::Deserialize;

use crate::types::{Board, BoardList, Card, Checklist, ChecklistItem, ItemState, Label};

#[derive(Debug, thiserror::Error)]
#[error("cannot decode {entity}: {source}")]
pub struct DecodeError {
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Deserialize)]
struct RawList {
    id: String,
    name: String,
    pos: f64,
    #[serde(default)]
    closed: bool,
}

#[derive(Deserialize)]
struct RawLabel {
    #[serde(default)]
    name: String,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct RawCard {
    id: String,
    name: String,
    #[serde(rename = "idList")]
    id_list: String,
    pos: f64,
    #[serde(default)]
    labels: Vec<RawLabel>,
    #[serde(default)]
    desc: String,
    #[serde(default, rename = "idChecklists")]
    id_checklists: Vec<String>,
}

#[derive(Deserialize)]
struct RawCheckItem {
    name: String,
    state: ItemState,
    #[serde(default)]
    pos: f64,
}

#[derive(Deserialize)]
struct RawChecklist {
    id: String,
    name: String,
    #[serde(rename = "idCard")]
    id_card: String,
    #[serde(default, rename = "checkItems")]
    check_items: Vec<RawCheckItem>,
}

#[derive(Deserialize)]
struct RawDescription {
    #[serde(default)]
    desc: String,
}

impl From<RawDescription> for String {
    fn from(r: RawDescription) -> Self {
        r.desc
    }
}

#[derive(Deserialize)]
struct RawBoard {
    id: String,
    name: String,
    #[serde(default)]
    lists: Vec<RawList>,
    #[serde(default)]
    cards: Vec<RawCard>,
    #[serde(default)]
    checklists: Vec<RawChecklist>,
}

impl From<RawList> for BoardList {
    fn from(r: RawList) -> Self {
        Self {
            id: r.id,
            name: r.name,
            position: r.pos,
            closed: r.closed,
        }
    }
}

impl From<RawCard> for Card {
    fn from(r: RawCard) -> Self {
        Self {
            id: r.id,
            title: r.name,
            list_id: r.id_list,
            position: r.pos,
            labels: r
                .labels
                .into_iter()
                .map(|l| Label {
                    name: l.name,
                    color: l.color,
                })
                .collect(),
            description: r.desc,
            checklist_ids: r.id_checklists,
        }
    }
}

impl From<RawChecklist> for Checklist {
    fn from(r: RawChecklist) -> Self {
        Self {
            id: r.id,
            name: r.name,
            card_id: r.id_card,
            items: r
                .check_items
                .into_iter()
                .map(|i| ChecklistItem {
                    name: i.name,
                    state: i.state,
                    position: i.pos,
                })
                .collect(),
        }
    }
}

fn decode<'a, R, T>(entity: &'static str, body: &'a str) -> Result<T, DecodeError>
where
    R: Deserialize<'a>,
    T: From<R>,
{
    serde_json::from_str::<R>(body)
        .map(T::from)
        .map_err(|source| DecodeError { entity, source })
}

fn decode_vec<'a, R, T>(entity: &'static str, body: &'a str) -> Result<Vec<T>, DecodeError>
where
    R: Deserialize<'a>,
    T: From<R>,
{
    let raw: Vec<R> =
        serde_json::from_str(body).map_err(|source| DecodeError { entity, source })?;
    Ok(raw.into_iter().map(T::from).collect())
}

pub fn decode_lists(body: &str) -> Result<Vec<BoardList>, DecodeError> {
    decode_vec::<RawList, _>("lists", body)
}

pub fn decode_cards(body: &str) -> Result<Vec<Card>, DecodeError> {
    decode_vec::<RawCard, _>("cards", body)
}

/// The description of a single card; the service omits `desc` when empty.
pub fn decode_description(body: &str) -> Result<String, DecodeError> {
    decode::<RawDescription, _>("card", body)
}

pub fn decode_checklists(body: &str) -> Result<Vec<Checklist>, DecodeError> {
    decode_vec::<RawChecklist, _>("checklists", body)
}

pub fn decode_board(body: &str) -> Result<Board, DecodeError> {
    let raw: RawBoard =
        serde_json::from_str(body).map_err(|source| DecodeError { entity: "board", source })?;
    Ok(Board {
        id: raw.id,
        name: raw.name,
        lists: raw.lists.into_iter().map(BoardList::from).collect(),
        cards: raw.cards.into_iter().map(Card::from).collect(),
        checklists: raw.checklists.into_iter().map(Checklist::from).collect(),
    })
}
