use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{NewIssue, Priority};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn IssueModal(board: BoardHook, dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Default);
    let (due_date, set_due_date) = signal(String::new());
    let (column_id, set_column_id) = signal(String::new());

    let columns = move || {
        board.detail.with(|d| {
            d.as_ref()
                .map(|d| d.columns.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    // Default to the first column until the user picks one
    let selected_column = move || {
        let chosen = column_id.get();
        if chosen.is_empty() {
            columns().into_iter().next().map(|(id, _)| id).unwrap_or_default()
        } else {
            chosen
        }
    };

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(Priority::Default);
        set_due_date.set(String::new());
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let status_id = selected_column();
        if status_id.is_empty() {
            return;
        }

        let mut issue = NewIssue::new(String::new(), status_id, title.get_untracked());
        issue.description = description.get_untracked().trim().to_string();
        issue.priority = priority.get_untracked();
        issue.due_date = NaiveDate::parse_from_str(&due_date.get_untracked(), "%Y-%m-%d").ok();

        if board.create_issue(issue) {
            reset();
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal issue-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE ISSUE"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Issue title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Issue description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=move |ev| set_column_id.set(event_target_value(&ev))
                            prop:value=selected_column
                        >
                            {move || {
                                columns()
                                    .into_iter()
                                    .map(|(id, name)| view! { <option value=id>{name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"PRIORITY"</label>
                        <select
                            on:change=move |ev| set_priority.set(Priority::from_code(&event_target_value(&ev)))
                            prop:value=move || priority.get().code()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.code()>{p.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"DUE DATE"</label>
                        <input
                            type="date"
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            prop:value=move || due_date.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
