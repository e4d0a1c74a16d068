use super::date_index::WeekRange;
use super::models::{BoardStore, Card};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub key: String,
    pub interactive: bool,
    pub cards: Vec<Card>,
}

/// One entry per week range, in range order.
pub type BoardView = Vec<Vec<ColumnView>>;

/// Full snapshot of what the board shows. Store keys outside `ranges` are
/// not rendered; range keys missing from the store render empty.
pub fn render(store: &BoardStore, ranges: &[WeekRange]) -> BoardView {
    ranges
        .iter()
        .map(|range| {
            range
                .keys
                .iter()
                .map(|key| ColumnView {
                    key: key.clone(),
                    interactive: range.interactive,
                    cards: store.cards(key).to_vec(),
                })
                .collect()
        })
        .collect()
}
