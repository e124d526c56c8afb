use crate::decode::DecodeError;
use crate::types::{BoardList, Card};

/// Failure talking to the board-hosting service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication rejected (HTTP {status}); check developer key and member token")]
    Auth { status: u16 },

    #[error("HTTP {status} for {path}")]
    Http { status: u16, path: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] DecodeError),
}

/// A board could not be fetched.
#[derive(Debug, thiserror::Error)]
#[error("fetching board {board_id} failed: {cause}")]
pub struct FetchError {
    pub board_id: String,
    #[source]
    pub cause: ClientError,
}

impl FetchError {
    pub fn new(board_id: impl Into<String>, cause: ClientError) -> Self {
        Self {
            board_id: board_id.into(),
            cause,
        }
    }
}

/// The read side of the hosting service that the burndown engine needs.
///
/// Each call is blocking with no retry; a failure surfaces immediately.
pub trait BoardClient {
    /// Open lists of a board, in the service's display order.
    fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, FetchError>;

    /// Open cards of a board, each tagged with its list id.
    fn fetch_cards(&self, board_id: &str) -> Result<Vec<Card>, FetchError>;
}

impl<T: BoardClient + ?Sized> BoardClient for &T {
    fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, FetchError> {
        (**self).fetch_lists(board_id)
    }

    fn fetch_cards(&self, board_id: &str) -> Result<Vec<Card>, FetchError> {
        (**self).fetch_cards(board_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_board_and_cause() {
        let err = FetchError::new("b42", ClientError::Http {
            status: 404,
            path: "boards/b42/lists".into(),
        });
        let msg = err.to_string();
        assert!(msg.contains("b42"));
        assert!(msg.contains("HTTP 404"));
    }

    #[test]
    fn auth_error_mentions_credentials() {
        let msg = ClientError::Auth { status: 401 }.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("member token"));
    }
}
