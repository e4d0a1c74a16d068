use leptos::prelude::*;
use crate::core::models::{BoardStore, CardField, DragState};
use crate::core::services::browser::{confirm, prompt};
use crate::core::services::export_board;

pub const ADD_CARD_PROMPT: &str = "카드 제목을 입력하세요:";
pub const DELETE_CARD_CONFIRM: &str = "정말로 이 카드를 삭제하시겠습니까?";

// Ask for a title and append a new card to the column
pub fn add_card(column_key: String, board_signal: RwSignal<BoardStore>) {
    let Some(title) = prompt(ADD_CARD_PROMPT) else {
        return;
    };

    let mut created = None;
    board_signal.maybe_update(|board| {
        created = board.add_card(&column_key, &title);
        created.is_some()
    });

    if let Some(card_id) = created {
        web_sys::console::log_1(&format!("Added card {} to {}", card_id, column_key).into());
    }
}

// Delete a card after the user confirms
pub fn delete_card(card_id: String, board_signal: RwSignal<BoardStore>) {
    if !confirm(DELETE_CARD_CONFIRM) {
        return;
    }

    let mut column = None;
    board_signal.maybe_update(|board| {
        column = board.find(&card_id).map(|(key, _)| key.to_string());
        board.delete_card(&card_id)
    });

    if let Some(column_key) = column {
        web_sys::console::log_1(&format!("Deleted card {} from {}", card_id, column_key).into());
    }
}

// Commit an inline edit. Always re-renders so a reverted edit swaps the input back out.
pub fn edit_card(
    card_id: String,
    field: CardField,
    value: String,
    board_signal: RwSignal<BoardStore>,
) {
    let mut changed = false;
    board_signal.update(|board| {
        changed = board.edit_card(&card_id, field, &value);
    });

    if !changed {
        web_sys::console::log_1(
            &format!("Kept previous {} for card {}", field.as_str(), card_id).into(),
        );
    }
}

pub fn start_drag(card_id: String, drag_signal: RwSignal<DragState>) {
    drag_signal.update(|drag| drag.start(card_id));
}

// Cancelled drag: forget the card, leave the board alone
pub fn end_drag(drag_signal: RwSignal<DragState>) {
    drag_signal.update(DragState::end);
}

// Drop the dragged card onto a column
pub fn drop_card(
    target_key: String,
    drag_signal: RwSignal<DragState>,
    board_signal: RwSignal<BoardStore>,
) {
    let mut drag = DragState::Idle;
    drag_signal.update(|state| drag = std::mem::take(state));

    let card_id = drag.dragged_id().map(str::to_string);
    let mut moved = false;
    board_signal.maybe_update(|board| {
        moved = drag.drop_on(board, &target_key);
        moved
    });

    if let Some(card_id) = card_id.filter(|_| moved) {
        web_sys::console::log_1(&format!("Dropped card {} on {}", card_id, target_key).into());
    }
}

pub fn export_current_board(board_signal: RwSignal<BoardStore>, filename: &str) {
    let result = board_signal.with_untracked(|board| export_board(board, filename));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to export board: {}", e).into());
    }
}
