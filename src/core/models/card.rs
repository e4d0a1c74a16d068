use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const DEFAULT_DESCRIPTION: &str = "내용을 입력하세요.";
pub const SAMPLE_DESCRIPTION: &str = "클릭해서 내용을 수정하세요.";

/// Which text field of a card an inline edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Title,
    Description,
}

impl CardField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::Description => "description",
        }
    }
}

/// A card as stored in the board file. Missing text fields read as empty;
/// fields this app does not know are carried through to the export.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Creates a card with a freshly generated id.
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: generate_card_id(),
            title,
            description,
            extra: Map::new(),
        }
    }

    /// Card created by the add button: trimmed title, placeholder description.
    pub fn with_default_description(title: &str) -> Self {
        Self::new(title.trim().to_string(), DEFAULT_DESCRIPTION.to_string())
    }

    /// Placeholder card the loader synthesizes for a column.
    pub fn sample_for(column_key: &str) -> Self {
        let date_part = column_key.split(' ').next().unwrap_or(column_key);
        Self::new(
            format!("샘플: {} 계획", date_part),
            SAMPLE_DESCRIPTION.to_string(),
        )
    }

    /// Overwrites `field` with the trimmed value. Blank input keeps the old text.
    pub fn update_field(&mut self, field: CardField, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        let slot = match field {
            CardField::Title => &mut self.title,
            CardField::Description => &mut self.description,
        };
        *slot = trimmed.to_string();
        true
    }
}

/// `card-<unix millis>-<random>`; unique across a session even for
/// cards created within the same millisecond.
pub fn generate_card_id() -> String {
    format!(
        "card-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let a = generate_card_id();
        let b = generate_card_id();
        assert!(a.starts_with("card-"));
        assert_ne!(a, b);
    }

    #[test]
    fn sample_card_uses_date_part_of_key() {
        let card = Card::sample_for("6/10 (화)");
        assert_eq!(card.title, "샘플: 6/10 계획");
        assert_eq!(card.description, SAMPLE_DESCRIPTION);
    }

    #[test]
    fn blank_update_keeps_previous_text() {
        let mut card = Card::new("Plan".into(), "Details".into());
        assert!(!card.update_field(CardField::Description, "   \n"));
        assert_eq!(card.description, "Details");

        assert!(card.update_field(CardField::Title, "  Review  "));
        assert_eq!(card.title, "Review");
        assert_eq!(card.description, "Details");
    }

    #[test]
    fn missing_text_fields_read_as_empty() {
        let card: Card = serde_json::from_str(r#"{"id": "card-7", "title": "Gym"}"#).unwrap();
        assert_eq!(card.title, "Gym");
        assert_eq!(card.description, "");
        assert!(card.extra.is_empty());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip_in_file_order() {
        let text = r#"{"id":"card-7","title":"Gym","description":"legs","tag":"health","color":"red"}"#;
        let card: Card = serde_json::from_str(text).unwrap();
        assert_eq!(card.extra.get("color"), Some(&Value::from("red")));
        assert_eq!(serde_json::to_string(&card).unwrap(), text);
    }
}
