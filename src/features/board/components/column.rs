use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::core::render::ColumnView;
use crate::features::board::hooks::BoardActions;
use super::card::CardItem;

#[component]
pub fn DayColumn(column: ColumnView, actions: BoardActions) -> impl IntoView {
    let ColumnView { key, interactive, cards } = column;

    let cards = cards
        .into_iter()
        .map(|card| view! { <CardItem card=card interactive=interactive actions=actions /> })
        .collect::<Vec<_>>();

    let title = key.clone();

    if !interactive {
        return view! {
            <div class="column past-week-column" data-date=key>
                <div class="column-title">{title}</div>
                <div class="card-list">{cards}</div>
            </div>
        }
        .into_any();
    }

    let drag_over = actions.drag_over;
    let key_for_class = key.clone();
    let key_for_over = key.clone();
    let key_for_leave = key.clone();
    let key_for_drop = key.clone();
    let key_for_add = key.clone();

    view! {
        <div
            class="column"
            class:drag-over=move || drag_over.with(|k| k.as_deref() == Some(key_for_class.as_str()))
            data-date=key
            on:dragover=move |ev: DragEvent| {
                // Required for the browser to allow a drop here
                ev.prevent_default();
                if drag_over.with_untracked(|k| k.as_deref() != Some(key_for_over.as_str())) {
                    drag_over.set(Some(key_for_over.clone()));
                }
            }
            on:dragleave=move |_| {
                if drag_over.with_untracked(|k| k.as_deref() == Some(key_for_leave.as_str())) {
                    drag_over.set(None);
                }
            }
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                actions.drop_card.run(key_for_drop.clone());
            }
        >
            <div class="column-title">{title}</div>
            <div class="card-list">{cards}</div>
            <button
                class="add-card-btn"
                on:click=move |_| actions.add_card.run(key_for_add.clone())
            >"+ 카드 추가"</button>
        </div>
    }
    .into_any()
}
