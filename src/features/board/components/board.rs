use leptos::prelude::*;
use crate::core::date_index::WeekRange;
use crate::core::models::BoardStore;
use crate::core::render::render;
use crate::features::board::hooks::BoardActions;
use super::column::DayColumn;

// Every board change rebuilds all weeks from the store
#[component]
pub fn WeekBoard(
    board: RwSignal<BoardStore>,
    ranges: StoredValue<Vec<WeekRange>>,
    actions: BoardActions,
) -> impl IntoView {
    move || {
        let weeks = board.with(|board| ranges.with_value(|ranges| render(board, ranges)));

        weeks
            .into_iter()
            .map(|columns| {
                let interactive = columns.first().map(|c| c.interactive).unwrap_or(false);
                let past = !interactive;
                let heading = if interactive { "이번 주" } else { "지난 주" };

                view! {
                    <section class="week-section" class:past-week=past>
                        <h2 class="week-title">{heading}</h2>
                        <div class="kanban-board">
                            {columns
                                .into_iter()
                                .map(|column| view! { <DayColumn column=column actions=actions /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                }
            })
            .collect::<Vec<_>>()
    }
}
