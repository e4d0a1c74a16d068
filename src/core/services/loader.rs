use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::browser::js_message;
use crate::core::date_index::{sample_keys, WeekRange};
use crate::core::models::BoardStore;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid board data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        LoadError::Network(js_message(&value))
    }
}

/// Parses a board file: `{ "<column key>": [{ id, title, description }] }`.
pub fn parse_board(text: &str) -> Result<BoardStore, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Placeholder board covering every column in view.
pub fn fallback_board(ranges: &[WeekRange]) -> BoardStore {
    BoardStore::sample(sample_keys(ranges))
}

/// Loads the board file, or sample data when it cannot be fetched or read.
pub async fn load_board(data_url: &str, ranges: &[WeekRange]) -> BoardStore {
    match fetch_board(data_url).await {
        Ok(board) => {
            web_sys::console::log_1(
                &format!(
                    "Loaded {} cards in {} columns from {}",
                    board.card_count(),
                    board.keys().count(),
                    data_url
                )
                .into(),
            );
            board
        }
        Err(e) => {
            web_sys::console::error_1(
                &format!("Error loading {}, falling back to sample data: {}", data_url, e).into(),
            );
            fallback_board(ranges)
        }
    }
}

async fn fetch_board(data_url: &str) -> Result<BoardStore, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_str(data_url))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?).await?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))?;
    parse_board(&text)
}
