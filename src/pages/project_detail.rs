use std::rc::Rc;

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::app::AppView;
use crate::features::kanban::components::{
    AddColumnForm, IssueModal, KanbanColumn, MembersModal, ProjectHeader,
};
use crate::features::kanban::hooks::{use_board, use_drag};

#[component]
pub fn ProjectDetail(project_id: String) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let board = use_board(project_id);
    let drag = use_drag(board);

    let issue_dialog: NodeRef<Dialog> = NodeRef::new();
    let members_dialog: NodeRef<Dialog> = NodeRef::new();

    let open = move |dialog: NodeRef<Dialog>| {
        if let Some(dialog) = dialog.get() {
            let _ = dialog.show_modal();
        }
    };

    let columns = move || board.detail.with(|d| d.as_ref().map(|d| d.columns.clone()).unwrap_or_default());

    view! {
        <div class="kanban-page">
            <div class="main-content">
                <ProjectHeader
                    board=board
                    on_back=Rc::new(move || navigate.set(AppView::Dashboard))
                    on_open_issue_modal=Rc::new(move || open(issue_dialog))
                    on_open_members=Rc::new(move || open(members_dialog))
                />
                <div class="kanban-board">
                    <For
                        each=columns
                        key=|column| column.id.clone()
                        children=move |column| view! { <KanbanColumn board=board drag=drag column=column /> }
                    />
                    <AddColumnForm board=board />
                </div>
            </div>
            <IssueModal board=board dialog_ref=issue_dialog />
            <MembersModal board=board dialog_ref=members_dialog />
        </div>
    }
}
