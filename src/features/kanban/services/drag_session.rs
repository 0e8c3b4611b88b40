//! Pointer-side bookkeeping for one drag gesture.
//!
//! Turns the browser's dragstart / dragenter / drop / dragend sequence into
//! a single [`DragEnd`] for the coordinator. One gesture at a time.

#[cfg(test)]
#[path = "drag_session_test.rs"]
mod drag_session_test;

use crate::core::models::{DragEnd, DragLocation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<(String, DragLocation)>,
    hover: Option<DragLocation>,
}

impl DragSession {
    pub fn start(&mut self, issue_id: impl Into<String>, source: DragLocation) {
        self.active = Some((issue_id.into(), source));
        self.hover = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_issue(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }

    /// Pointer entered a slot; ignored when nothing is being dragged.
    pub fn hover(&mut self, target: DragLocation) {
        if self.active.is_some() {
            self.hover = Some(target);
        }
    }

    pub fn hover_target(&self) -> Option<&DragLocation> {
        self.hover.as_ref()
    }

    pub fn is_hovering(&self, target: &DragLocation) -> bool {
        self.hover.as_ref() == Some(target)
    }

    /// Released over `column_id`. Lands on the hovered slot when it belongs
    /// to that column, otherwise at `column_end`.
    pub fn drop_on(&mut self, column_id: &str, column_end: usize) -> Option<DragEnd> {
        let (issue_id, source) = self.active.take()?;
        let destination = match self.hover.take() {
            Some(slot) if slot.column_id == column_id => slot,
            _ => DragLocation::new(column_id, column_end),
        };
        Some(DragEnd {
            issue_id,
            source,
            destination: Some(destination),
        })
    }

    /// Gesture ended without a drop. `None` if a drop already consumed it.
    pub fn cancel(&mut self) -> Option<DragEnd> {
        let (issue_id, source) = self.active.take()?;
        self.hover = None;
        Some(DragEnd {
            issue_id,
            source,
            destination: None,
        })
    }
}
