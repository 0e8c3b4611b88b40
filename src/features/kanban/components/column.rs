use leptos::prelude::*;

use crate::core::models::StatusColumn;
use crate::features::kanban::components::IssueCard;
use crate::features::kanban::hooks::{BoardHook, DragTracker};

#[component]
pub fn KanbanColumn(board: BoardHook, drag: DragTracker, column: StatusColumn) -> impl IntoView {
    let column_id = StoredValue::new(column.id.clone());
    let on_drop = drag.on_drop(column.id);

    let delete_column = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this status column and all of its issues?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            board.delete_column(column_id.get_value());
        }
    };

    let issue_count = move || column_id.with_value(|id| board.board.with(|b| b.column(id).len()));
    let load_state = move || {
        column_id.with_value(|id| {
            board.cache.with(|c| {
                if c.is_in_flight(id) {
                    Some(view! { <div class="column-loading">"Loading..."</div> }.into_any())
                } else if c.is_failed(id) {
                    Some(view! { <div class="column-error">"Failed to load issues"</div> }.into_any())
                } else {
                    None
                }
            })
        })
    };
    let indexed_issues = move || {
        column_id
            .with_value(|id| board.column_issues(id))
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="kanban-column" on:dragover=drag.on_drag_over() on:drop=on_drop>
            <div class="column-header">
                <h3>{column.name}</h3>
                <span class="task-count">{issue_count}</span>
                <button class="action-btn delete-btn" title="Delete column" on:click=delete_column>"🞮"</button>
            </div>
            <div class="column-content">
                {load_state}
                <For
                    each=indexed_issues
                    key=|(index, issue)| (issue.id.clone(), *index, issue.status.clone())
                    children=move |(index, issue)| {
                        view! {
                            <IssueCard
                                board=board
                                drag=drag
                                issue=issue
                                column_id=column_id.get_value()
                                index=index
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
