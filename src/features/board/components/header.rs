use leptos::prelude::*;
use crate::core::models::Theme;

#[component]
pub fn BoardHeader(
    #[prop(into)] theme: Signal<Theme>,
    on_toggle_theme: Callback<()>,
    on_export: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="board-header">
            <h1>"주간 칸반 보드"</h1>
            <div class="board-actions">
                <button
                    id="export-data-btn"
                    class="btn-secondary"
                    title="Export board as JSON"
                    on:click=move |_| on_export.run(())
                >"데이터 내보내기"</button>
                <button
                    id="theme-toggle"
                    class="btn-secondary"
                    title="Toggle theme"
                    on:click=move |_| on_toggle_theme.run(())
                >{move || theme.get().icon()}</button>
            </div>
        </header>
    }
}
