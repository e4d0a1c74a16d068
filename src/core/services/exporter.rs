use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::browser::{js_message, window};
use crate::core::models::BoardStore;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser download failed: {0}")]
    Browser(String),
}

impl From<JsValue> for ExportError {
    fn from(value: JsValue) -> Self {
        ExportError::Browser(js_message(&value))
    }
}

/// Whole board, including columns that are not on screen, as 2-space
/// indented JSON.
pub fn export_json(board: &BoardStore) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Serializes `board` and hands it to the browser as a file download.
pub fn export_board(board: &BoardStore, filename: &str) -> Result<(), ExportError> {
    let json = export_json(board)?;
    download(&json, filename)?;
    web_sys::console::log_1(
        &format!("Exported {} cards to {}", board.card_count(), filename).into(),
    );
    Ok(())
}

fn download(contents: &str, filename: &str) -> Result<(), ExportError> {
    let document = window()
        .map_err(ExportError::Browser)?
        .document()
        .ok_or_else(|| ExportError::Browser("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("no document body".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| ExportError::Browser("could not create download link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Card;

    #[test]
    fn export_is_two_space_pretty_json_in_key_order() {
        let board: BoardStore = vec![
            (
                "6/10 (화)".to_string(),
                vec![Card {
                    id: "card-1".into(),
                    title: "Plan".into(),
                    description: "Sprint".into(),
                    ..Default::default()
                }],
            ),
            ("6/9 (월)".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();

        let expected = r#"{
  "6/10 (화)": [
    {
      "id": "card-1",
      "title": "Plan",
      "description": "Sprint"
    }
  ],
  "6/9 (월)": []
}"#;
        assert_eq!(export_json(&board).unwrap(), expected);
    }

    #[test]
    fn export_does_not_touch_the_board() {
        let board = BoardStore::sample(["6/9 (월)"]);
        let before = board.clone();
        export_json(&board).unwrap();
        assert_eq!(board, before);
    }
}
