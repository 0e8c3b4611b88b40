use std::rc::Rc;

use leptos::prelude::*;

use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn ProjectHeader(
    board: BoardHook,
    on_back: Rc<dyn Fn() + 'static>,
    on_open_issue_modal: Rc<dyn Fn() + 'static>,
    on_open_members: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    let name = move || board.detail.with(|d| d.as_ref().map(|d| d.project.name.clone()).unwrap_or_default());
    let description = move || board.detail.with(|d| d.as_ref().map(|d| d.project.description.clone()).unwrap_or_default());
    let category = move || board.detail.with(|d| d.as_ref().map(|d| d.project.category.clone()).unwrap_or_default());
    let tags = move || board.detail.with(|d| d.as_ref().map(|d| d.project.tags.clone()).unwrap_or_default());

    let delete_project = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this project? This action cannot be undone.")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            board.delete_project();
        }
    };

    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{move || if board.loading.get() && name().is_empty() { "Loading...".to_string() } else { name() }}</h1>
                <p class="project-description">{description}</p>
                <div class="project-meta">
                    <span class="project-category">{category}</span>
                    {move || tags().into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
                <div class="project-stats">
                    {move || {
                        let stats = board.stats();
                        view! {
                            <span>{format!("{} issues", stats.total_issues)}</span>
                            <span>{format!("{} members", stats.members)}</span>
                            <span>{format!("{} columns", stats.columns)}</span>
                        }
                    }}
                </div>
            </div>
            <div class="kanban-actions">
                <button class="btn-secondary kanban-header-btn" title="Back to dashboard" on:click={
                    let cb = on_back.clone();
                    move |_| (cb.as_ref())()
                }>"🡄"</button>
                <button class="btn-secondary kanban-header-btn" title="Members" on:click={
                    let cb = on_open_members.clone();
                    move |_| (cb.as_ref())()
                }>"👥"</button>
                <button class="btn-primary kanban-header-btn" title="New issue" on:click={
                    let cb = on_open_issue_modal.clone();
                    move |_| (cb.as_ref())()
                }>"🞦"</button>
                <button class="action-btn delete-btn" title="Delete Project" on:click=delete_project>"🞮"</button>
            </div>
        </header>
    }
}
