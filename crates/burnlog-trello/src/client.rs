use burnlog_core::decode::{self, DecodeError};
use burnlog_core::{BoardClient, BoardList, Card, Checklist, ClientError, FetchError};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::settings::Settings;

/// Blocking Trello REST client. One request per call, no retries.
pub struct TrelloClient {
    http: Client,
    settings: Settings,
}

#[derive(Deserialize)]
struct Created {
    id: String,
}

impl TrelloClient {
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("burnlog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;
        Ok(Self { http, settings })
    }

    /// Absolute URL for an API path, with credentials and extra query pairs.
    ///
    /// `path` may already carry a query string (`boards/x/lists?filter=open`).
    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        let raw = format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| ClientError::Transport(format!("invalid URL for {path}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            for (k, v) in params {
                query.append_pair(k, v);
            }
            query
                .append_pair("key", &self.settings.developer_public_key)
                .append_pair("token", self.settings.member_token.expose_secret());
        }
        Ok(url)
    }

    fn send(&self, request: RequestBuilder, path: &str) -> Result<String, ClientError> {
        let response = request.send().map_err(transport)?;
        check_status(response.status(), path)?;
        response.text().map_err(transport)
    }

    fn get(&self, path: &str) -> Result<String, ClientError> {
        tracing::debug!(path, "GET");
        let url = self.url(path, &[])?;
        self.send(self.http.get(url), path)
    }

    fn post(&self, path: &str, params: &[(&str, &str)]) -> Result<String, ClientError> {
        tracing::debug!(path, "POST");
        let url = self.url(path, params)?;
        self.send(self.http.post(url), path)
    }

    fn put(&self, path: &str, params: &[(&str, &str)]) -> Result<String, ClientError> {
        tracing::debug!(path, "PUT");
        let url = self.url(path, params)?;
        self.send(self.http.put(url), path)
    }

    /// GET any API path and return the parsed JSON.
    pub fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let body = self.get(path)?;
        serde_json::from_str(&body).map_err(|source| {
            ClientError::Decode(DecodeError {
                entity: "response",
                source,
            })
        })
    }

    pub fn lists(&self, board_id: &str) -> Result<Vec<BoardList>, ClientError> {
        let body = self.get(&format!("boards/{board_id}/lists?filter=open"))?;
        Ok(decode::decode_lists(&body)?)
    }

    pub fn cards(&self, board_id: &str) -> Result<Vec<Card>, ClientError> {
        let body = self.get(&format!("boards/{board_id}/cards?filter=open"))?;
        Ok(decode::decode_cards(&body)?)
    }

    pub fn checklists(&self, board_id: &str) -> Result<Vec<Checklist>, ClientError> {
        let body = self.get(&format!("boards/{board_id}/checklists"))?;
        Ok(decode::decode_checklists(&body)?)
    }

    pub fn card_description(&self, card_id: &str) -> Result<String, ClientError> {
        let body = self.get(&format!("cards/{card_id}"))?;
        Ok(decode::decode_description(&body)?)
    }

    pub fn set_card_description(&self, card_id: &str, text: &str) -> Result<(), ClientError> {
        self.put(&format!("cards/{card_id}/desc"), &[("value", text)])?;
        Ok(())
    }

    /// The whole board with open lists and cards and all checklists, as raw JSON.
    pub fn board_document(&self, board_id: &str) -> Result<serde_json::Value, ClientError> {
        self.get_json(&format!(
            "boards/{board_id}?lists=open&cards=open&checklists=all"
        ))
    }

    fn created_id(entity: &'static str, body: &str) -> Result<String, ClientError> {
        serde_json::from_str::<Created>(body)
            .map(|c| c.id)
            .map_err(|source| ClientError::Decode(DecodeError { entity, source }))
    }
}

impl crate::backup::BoardWriter for TrelloClient {
    fn create_list(&self, board_id: &str, name: &str, position: f64) -> Result<String, ClientError> {
        let pos = position.to_string();
        let body = self.post(
            "lists",
            &[("name", name), ("idBoard", board_id), ("pos", pos.as_str())],
        )?;
        Self::created_id("list", &body)
    }

    fn create_card(&self, list_id: &str, card: &Card) -> Result<String, ClientError> {
        let pos = card.position.to_string();
        let body = self.post(
            "cards",
            &[
                ("idList", list_id),
                ("name", card.title.as_str()),
                ("desc", card.description.as_str()),
                ("pos", pos.as_str()),
            ],
        )?;
        Self::created_id("card", &body)
    }

    fn create_checklist(&self, card_id: &str, name: &str) -> Result<String, ClientError> {
        let body = self.post("checklists", &[("idCard", card_id), ("name", name)])?;
        Self::created_id("checklist", &body)
    }

    fn create_check_item(
        &self,
        checklist_id: &str,
        name: &str,
        complete: bool,
    ) -> Result<(), ClientError> {
        let checked = if complete { "true" } else { "false" };
        self.post(
            &format!("checklists/{checklist_id}/checkItems"),
            &[("name", name), ("checked", checked)],
        )?;
        Ok(())
    }
}

impl BoardClient for TrelloClient {
    fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, FetchError> {
        self.lists(board_id).map_err(|e| FetchError::new(board_id, e))
    }

    fn fetch_cards(&self, board_id: &str) -> Result<Vec<Card>, FetchError> {
        self.cards(board_id).map_err(|e| FetchError::new(board_id, e))
    }
}

/// reqwest errors embed the request URL, which carries the token.
fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.without_url().to_string())
}

fn check_status(status: StatusCode, path: &str) -> Result<(), ClientError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Auth {
            status: status.as_u16(),
        });
    }
    // strip any query so the message never carries parameters
    let path = path.split('?').next().unwrap_or(path);
    Err(ClientError::Http {
        status: status.as_u16(),
        path: path.to_string(),
    })
}
