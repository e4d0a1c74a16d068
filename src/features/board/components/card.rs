use gloo_timers::callback::Timeout;
use leptos::ev::{DragEvent, KeyboardEvent};
use leptos::html;
use leptos::prelude::*;
use crate::core::models::{Card, CardField};
use crate::features::board::hooks::BoardActions;

#[component]
pub fn CardItem(card: Card, interactive: bool, actions: BoardActions) -> impl IntoView {
    if !interactive {
        return view! {
            <div class="card" draggable="false" data-id=card.id.clone()>
                <div class="card-title">{card.title.clone()}</div>
                <div class="card-description">{card.description.clone()}</div>
            </div>
        }
        .into_any();
    }

    let Card { id, title, description, .. } = card;
    // Set one tick after dragstart so the drag image keeps the normal look
    let lifted = RwSignal::new(false);

    let id_for_drag = id.clone();
    let id_for_title = id.clone();
    let id_for_description = id.clone();
    let id_for_delete = id.clone();

    view! {
        <div
            class="card"
            class:dragging=move || lifted.get()
            draggable="true"
            data-id=id
            on:dragstart=move |ev: DragEvent| {
                if let Some(transfer) = ev.data_transfer() {
                    let _ = transfer.set_data("text/plain", &id_for_drag);
                }
                actions.start_drag.run(id_for_drag.clone());
                Timeout::new(0, move || {
                    let _ = lifted.try_set(true);
                })
                .forget();
            }
            on:dragend=move |_| {
                let _ = lifted.try_set(false);
                actions.end_drag.run(());
            }
        >
            <EditableText
                card_id=id_for_title
                field=CardField::Title
                text=title
                on_commit=actions.edit_card
            />
            <EditableText
                card_id=id_for_description
                field=CardField::Description
                text=description
                on_commit=actions.edit_card
            />
            <button
                class="delete-card"
                on:click=move |ev| {
                    ev.stop_propagation();
                    actions.delete_card.run(id_for_delete.clone());
                }
            >"×"</button>
        </div>
    }
    .into_any()
}

/// Click-to-edit text. Title commits on Enter, description on Ctrl+Enter,
/// both on blur.
#[component]
fn EditableText(
    card_id: String,
    field: CardField,
    text: String,
    on_commit: Callback<(String, CardField, String)>,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let text = StoredValue::new(text);
    let card_id = StoredValue::new(card_id);

    // Only the first of Enter/blur commits; the input may blur again while it is removed
    let commit = move |value: String| {
        if editing.try_update(|e| std::mem::replace(e, false)) == Some(true) {
            on_commit.run((card_id.get_value(), field, value));
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && (field == CardField::Title || ev.ctrl_key()) {
            ev.prevent_default();
            commit(event_target_value(&ev));
        }
    };

    move || {
        if !editing.get() {
            let class = match field {
                CardField::Title => "card-title",
                CardField::Description => "card-description",
            };
            return view! {
                <div class=class on:click=move |_| editing.set(true)>{text.get_value()}</div>
            }
            .into_any();
        }

        match field {
            CardField::Title => {
                let input_ref = NodeRef::<html::Input>::new();
                Effect::new(move |_| {
                    if let Some(input) = input_ref.get() {
                        let _ = input.focus();
                    }
                });
                view! {
                    <input
                        node_ref=input_ref
                        class="edit-title"
                        type="text"
                        prop:value=text.get_value()
                        on:blur=move |ev| commit(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                }
                .into_any()
            }
            CardField::Description => {
                let textarea_ref = NodeRef::<html::Textarea>::new();
                Effect::new(move |_| {
                    if let Some(textarea) = textarea_ref.get() {
                        let _ = textarea.focus();
                    }
                });
                view! {
                    <textarea
                        node_ref=textarea_ref
                        class="edit-description"
                        prop:value=text.get_value()
                        on:blur=move |ev| commit(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                }
                .into_any()
            }
        }
    }
}
