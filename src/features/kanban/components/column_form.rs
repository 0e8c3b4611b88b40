use leptos::ev;
use leptos::prelude::*;

use crate::core::models::MAX_STATUS_COLUMNS;
use crate::features::kanban::hooks::BoardHook;

// Trailing "add column" slot; hidden once the project hits the cap
#[component]
pub fn AddColumnForm(board: BoardHook) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let can_add = move || board.detail.with(|d| d.as_ref().is_some_and(|d| d.can_add_column()));

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if board.add_column(name.get_untracked()) {
            set_name.set(String::new());
        }
    };

    view! {
        <Show
            when=can_add
            fallback=|| view! {
                <div class="kanban-column column-limit">
                    {format!("Projects are limited to {MAX_STATUS_COLUMNS} status columns")}
                </div>
            }
        >
            <form class="kanban-column add-column" on:submit=submit>
                <input
                    type="text"
                    placeholder="New status column..."
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=move || name.get()
                />
                <button type="submit" class="btn-primary">"Add column"</button>
            </form>
        </Show>
    }
}
