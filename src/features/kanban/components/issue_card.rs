use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{DragLocation, Issue};
use crate::features::kanban::hooks::{BoardHook, DragTracker};

#[component]
pub fn IssueCard(
    board: BoardHook,
    drag: DragTracker,
    issue: Issue,
    #[prop(into)] column_id: String,
    index: usize,
) -> impl IntoView {
    let slot = DragLocation::new(column_id, index);
    let on_drag_start = drag.on_drag_start(issue.id.clone(), slot.clone());
    let on_drag_enter = drag.on_drag_enter(slot.clone());
    let dragged_id = issue.id.clone();
    let overdue = issue.is_overdue(Utc::now().date_naive());
    let due = issue.due_date.map(|d| d.format("%b %-d, %Y").to_string());
    let priority = issue.priority;

    let delete = {
        let issue_id = issue.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this issue?").unwrap_or(false))
                .unwrap_or(false);
            if confirmed {
                board.delete_issue(issue_id.clone());
            }
        }
    };

    view! {
        <div
            class="task-card issue-card"
            class:dragging=move || drag.is_dragged(&dragged_id)
            class:drop-target=move || drag.is_hovering(&slot)
            draggable="true"
            on:dragstart=on_drag_start
            on:dragenter=on_drag_enter
            on:dragend=drag.on_drag_end()
        >
            <div class="issue-card-header">
                <span class=format!("priority-badge priority-{}", priority.tone())>{priority.as_str()}</span>
                <button class="action-btn delete-btn" title="Delete issue" on:click=delete>"🞮"</button>
            </div>
            <h4 class="issue-title">{issue.title.clone()}</h4>
            {(!issue.description.is_empty()).then(|| view! { <p class="issue-description">{issue.description.clone()}</p> })}
            {due.map(|due| view! { <span class="issue-due" class:overdue=overdue>{due}</span> })}
            <div class="issue-tags">
                {issue.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
            </div>
        </div>
    }
}
