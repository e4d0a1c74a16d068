use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::BoardConfig;
use crate::core::date_index::WeekRange;
use crate::core::models::{BoardStore, CardField, DragState};
use crate::core::services::load_board;
use crate::features::board::services::{
    add_card, delete_card, drop_card, edit_card, end_drag, export_current_board, start_drag,
};

/// Handlers the columns and cards call. All of them route through the
/// board signal, so every change re-renders the board.
#[derive(Clone, Copy)]
pub struct BoardActions {
    pub add_card: Callback<String>,
    pub delete_card: Callback<String>,
    pub edit_card: Callback<(String, CardField, String)>,
    pub start_drag: Callback<String>,
    pub end_drag: Callback<()>,
    pub drop_card: Callback<String>,
    /// Column currently highlighted as a drop target.
    pub drag_over: RwSignal<Option<String>>,
}

pub struct BoardHook {
    pub board: RwSignal<BoardStore>,
    pub ranges: StoredValue<Vec<WeekRange>>,
    pub loaded: ReadSignal<bool>,
    pub actions: BoardActions,
    pub export: Callback<()>,
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let board = RwSignal::new(BoardStore::new());
    let drag = RwSignal::new(DragState::Idle);
    let drag_over = RwSignal::new(None::<String>);
    let (loaded, set_loaded) = signal(false);

    let today = Local::now().date_naive();
    let ranges = StoredValue::new(config.layout.ranges(today));

    // Load the board file on mount; the loader falls back to sample data
    {
        let data_url = config.data_url.clone();
        spawn_local(async move {
            let week_ranges = ranges.get_value();
            let loaded_board = load_board(&data_url, &week_ranges).await;
            board.set(loaded_board);
            set_loaded.set(true);
        });
    }

    let actions = BoardActions {
        add_card: Callback::new(move |column_key: String| add_card(column_key, board)),
        delete_card: Callback::new(move |card_id: String| delete_card(card_id, board)),
        edit_card: Callback::new(move |(card_id, field, value): (String, CardField, String)| {
            edit_card(card_id, field, value, board)
        }),
        start_drag: Callback::new(move |card_id: String| start_drag(card_id, drag)),
        end_drag: Callback::new(move |_: ()| {
            drag_over.set(None);
            end_drag(drag);
        }),
        drop_card: Callback::new(move |target_key: String| {
            drag_over.set(None);
            drop_card(target_key, drag, board);
        }),
        drag_over,
    };

    let export = {
        let filename = config.export_filename.clone();
        Callback::new(move |_: ()| export_current_board(board, &filename))
    };

    BoardHook {
        board,
        ranges,
        loaded,
        actions,
        export,
    }
}
