use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::services::browser::location_search;
use crate::features::board::{use_board, use_theme, BoardHeader, WeekBoard};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_query(&location_search());
    let theme = use_theme(config.theme_key.clone());
    let board = use_board(config);

    let loaded = board.loaded;
    let board_signal = board.board;
    let ranges = board.ranges;
    let actions = board.actions;

    view! {
        <main class="app">
            <BoardHeader
                theme=theme.theme
                on_toggle_theme=theme.toggle
                on_export=board.export
            />
            <Show when=move || loaded.get()>
                <WeekBoard board=board_signal ranges=ranges actions=actions />
            </Show>
        </main>
    }
}
