use leptos::prelude::*;
use web_sys::DragEvent;

use crate::core::models::DragLocation;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::DragSession;

const DRAG_MIME: &str = "text/plain";

/// Native HTML5 drag-and-drop wired to one board.
#[derive(Clone, Copy)]
pub struct DragTracker {
    pub session: RwSignal<DragSession>,
    board: BoardHook,
}

pub fn use_drag(board: BoardHook) -> DragTracker {
    DragTracker {
        session: RwSignal::new(DragSession::default()),
        board,
    }
}

impl DragTracker {
    pub fn is_dragged(&self, issue_id: &str) -> bool {
        self.session.with(|s| s.dragged_issue() == Some(issue_id))
    }

    pub fn is_hovering(&self, target: &DragLocation) -> bool {
        self.session.with(|s| s.is_hovering(target))
    }

    // dragstart on a card
    pub fn on_drag_start(&self, issue_id: String, source: DragLocation) -> impl Fn(DragEvent) + 'static {
        let session = self.session;
        move |ev: DragEvent| {
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                // Firefox refuses to start a drag with no payload.
                let _ = transfer.set_data(DRAG_MIME, &issue_id);
            }
            session.update(|s| s.start(issue_id.clone(), source.clone()));
        }
    }

    // dragenter on a card marks the slot the issue would take
    pub fn on_drag_enter(&self, target: DragLocation) -> impl Fn(DragEvent) + 'static {
        let session = self.session;
        move |ev: DragEvent| {
            ev.prevent_default();
            if session.with_untracked(|s| s.is_dragging() && !s.is_hovering(&target)) {
                session.update(|s| s.hover(target.clone()));
            }
        }
    }

    // dragover must be cancelled for the column to accept a drop
    pub fn on_drag_over(&self) -> impl Fn(DragEvent) + Copy + 'static {
        move |ev: DragEvent| {
            ev.prevent_default();
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_drop_effect("move");
            }
        }
    }

    pub fn on_drop(&self, column_id: String) -> impl Fn(DragEvent) + 'static {
        let DragTracker { session, board } = *self;
        move |ev: DragEvent| {
            ev.prevent_default();
            let column_end = board.board.with_untracked(|b| b.column(&column_id).len());
            if let Some(drag) = session.try_update(|s| s.drop_on(&column_id, column_end)).flatten() {
                board.drag_end(drag);
            }
        }
    }

    // dragend fires after drop too; only a gesture nobody consumed reaches the board
    pub fn on_drag_end(&self) -> impl Fn(DragEvent) + Copy + 'static {
        let DragTracker { session, board } = *self;
        move |_: DragEvent| {
            if let Some(drag) = session.try_update(DragSession::cancel).flatten() {
                board.drag_end(drag);
            }
        }
    }
}
