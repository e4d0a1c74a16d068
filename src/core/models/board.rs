use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardField};

/// Column key → ordered cards. Key order is insertion order and is kept on
/// export; card order is display order.
///
/// A card id lives in at most one column. Keys that are not present are
/// read as empty columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BoardStore {
    columns: IndexMap<String, Vec<Card>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One placeholder card per column key, in the given order.
    pub fn sample<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = Self::new();
        for key in keys {
            store
                .columns
                .insert(key.to_string(), vec![Card::sample_for(key)]);
        }
        store
    }

    pub fn cards(&self, column_key: &str) -> &[Card] {
        self.columns
            .get(column_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn card_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Column key and card for `card_id`, first match in key order.
    pub fn find(&self, card_id: &str) -> Option<(&str, &Card)> {
        self.columns.iter().find_map(|(key, cards)| {
            cards
                .iter()
                .find(|c| c.id == card_id)
                .map(|card| (key.as_str(), card))
        })
    }

    /// Appends `card` to `column_key`, creating the column if needed.
    pub fn push_card(&mut self, column_key: &str, card: Card) {
        self.columns
            .entry(column_key.to_string())
            .or_default()
            .push(card);
    }

    /// Add: blank titles are ignored. Returns the new card's id.
    pub fn add_card(&mut self, column_key: &str, title: &str) -> Option<String> {
        if title.trim().is_empty() {
            return None;
        }
        let card = Card::with_default_description(title);
        let id = card.id.clone();
        self.push_card(column_key, card);
        Some(id)
    }

    /// Delete: removes the card from whichever column holds it.
    pub fn delete_card(&mut self, card_id: &str) -> bool {
        let mut removed = false;
        for cards in self.columns.values_mut() {
            let before = cards.len();
            cards.retain(|c| c.id != card_id);
            removed |= cards.len() != before;
        }
        removed
    }

    /// Edit: overwrites one field of the first card with `card_id`.
    /// Returns `false` when the card is missing or the value is blank.
    pub fn edit_card(&mut self, card_id: &str, field: CardField, value: &str) -> bool {
        self.columns
            .values_mut()
            .find_map(|cards| cards.iter_mut().find(|c| c.id == card_id))
            .map(|card| card.update_field(field, value))
            .unwrap_or(false)
    }

    /// Move: detaches the card and appends it to the end of `target_key`.
    pub fn move_card(&mut self, card_id: &str, target_key: &str) -> bool {
        let detached = self.columns.values_mut().find_map(|cards| {
            cards
                .iter()
                .position(|c| c.id == card_id)
                .map(|index| cards.remove(index))
        });

        match detached {
            Some(card) => {
                self.push_card(target_key, card);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(String, Vec<Card>)> for BoardStore {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Card>)>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
