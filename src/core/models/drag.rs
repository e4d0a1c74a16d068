use super::board::BoardStore;

/// Logical drag-and-drop state. Hover highlighting is kept outside of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

impl DragState {
    pub fn start(&mut self, card_id: impl Into<String>) {
        *self = DragState::Dragging(card_id.into());
    }

    pub fn dragged_id(&self) -> Option<&str> {
        match self {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Cancelled drag: back to idle, board untouched.
    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    /// Drop on `target_key`. The recorded id is cleared whatever happens;
    /// returns whether a card actually moved.
    pub fn drop_on(&mut self, board: &mut BoardStore, target_key: &str) -> bool {
        match std::mem::take(self) {
            DragState::Dragging(card_id) => board.move_card(&card_id, target_key),
            DragState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::card::Card;

    fn board() -> BoardStore {
        vec![
            (
                "6/9 (월)".to_string(),
                vec![Card {
                    id: "a".into(),
                    title: "Standup".into(),
                    description: "daily".into(),
                    ..Default::default()
                }],
            ),
            ("6/10 (화)".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn drop_moves_recorded_card_and_returns_to_idle() {
        let mut board = board();
        let mut drag = DragState::default();
        drag.start("a");
        assert_eq!(drag.dragged_id(), Some("a"));

        assert!(drag.drop_on(&mut board, "6/10 (화)"));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(board.cards("6/10 (화)")[0].id, "a");
        assert!(board.cards("6/9 (월)").is_empty());
    }

    #[test]
    fn drop_without_drag_does_nothing() {
        let mut board = board();
        let before = board.clone();
        let mut drag = DragState::Idle;
        assert!(!drag.drop_on(&mut board, "6/10 (화)"));
        assert_eq!(board, before);
    }

    #[test]
    fn drop_of_vanished_card_still_clears_state() {
        let mut board = board();
        let before = board.clone();
        let mut drag = DragState::default();
        drag.start("deleted-meanwhile");
        assert!(!drag.drop_on(&mut board, "6/10 (화)"));
        assert_eq!(drag.dragged_id(), None);
        assert_eq!(board, before);
    }

    #[test]
    fn end_never_touches_board() {
        let board = board();
        let mut drag = DragState::default();
        drag.start("a");
        drag.end();
        assert_eq!(drag, DragState::Idle);
        assert_eq!(board.cards("6/9 (월)").len(), 1);
    }
}
