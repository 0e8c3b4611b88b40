//! Optimistic drag-and-drop coordinator.
//!
//! A drop is applied to the local [`BoardState`] immediately. Cross-column
//! moves are then sent to the server; pure in-column reorders never are,
//! since ordering inside a column is not persisted.
//!
//! Each applied mutation takes the next value of a monotonic sequence. A
//! failed move restores its pre-drag snapshot only while it is still the
//! latest mutation; a stale failure instead invalidates the affected columns
//! so the next read brings back the server's view.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use crate::core::models::{BoardState, DragEnd, Issue};
use crate::core::services::{ApiError, BoardRemote, FetchCache};

pub const MOVE_FAILED_FALLBACK: &str = "Failed to move issue";

/// A cross-column move that has been applied locally and awaits the server.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove {
    pub seq: u64,
    pub issue_id: String,
    pub from_column: String,
    pub to_column: String,
    snapshot: BoardState,
}

impl PendingMove {
    /// Board as it was right before the drag.
    pub fn snapshot(&self) -> &BoardState {
        &self.snapshot
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Cancelled drop, in-place drop, or a drag that no longer matches the board.
    Ignored,
    /// In-column reorder; nothing to send.
    Reordered { column_id: String, seq: u64 },
    /// Cross-column move; send it with [`sync_move`] and hand the result to
    /// [`ReorderCoordinator::settle`].
    Moved(PendingMove),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSettlement {
    Confirmed,
    RolledBack { message: String },
    /// The move failed after newer local changes; its snapshot was discarded.
    Superseded { message: String },
}

impl MoveSettlement {
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            MoveSettlement::Confirmed => None,
            MoveSettlement::RolledBack { message } | MoveSettlement::Superseded { message } => {
                Some(message)
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReorderCoordinator {
    last_seq: u64,
}

impl ReorderCoordinator {
    pub fn latest_seq(&self) -> u64 {
        self.last_seq
    }

    /// Records a board change made outside of a drag (column load, issue
    /// created or deleted) so older snapshots are no longer restorable.
    pub fn record_mutation(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Applies a drop to `board` synchronously.
    pub fn apply_drag(&mut self, board: &mut BoardState, drag: &DragEnd) -> DragOutcome {
        let Some(destination) = drag.destination.as_ref() else {
            return DragOutcome::Ignored;
        };
        if drag.is_in_place() {
            return DragOutcome::Ignored;
        }

        let from = drag.source.column_id.as_str();
        let to = destination.column_id.as_str();
        if !board.has_column(from) || !board.has_column(to) {
            log::warn!("Ignoring drop of {} between unknown columns {from} -> {to}", drag.issue_id);
            return DragOutcome::Ignored;
        }

        let Some(source_index) = resolve_source_index(board.column(from), &drag.issue_id, drag.source.index) else {
            log::warn!("Ignoring drop of {}: not found in column {from}", drag.issue_id);
            return DragOutcome::Ignored;
        };

        let cross_column = from != to;
        if !cross_column && source_index == destination.index {
            return DragOutcome::Ignored;
        }

        let snapshot = cross_column.then(|| board.clone());

        let Some(mut moved) = board.column_mut(from).map(|issues| issues.remove(source_index)) else {
            return DragOutcome::Ignored;
        };
        if cross_column {
            moved.status = to.to_string();
        }
        if let Some(target) = board.column_mut(to) {
            let index = destination.index.min(target.len());
            target.insert(index, moved);
        }

        let seq = self.record_mutation();
        match snapshot {
            Some(snapshot) => {
                log::debug!("Move #{seq}: issue {} {from} -> {to}", drag.issue_id);
                DragOutcome::Moved(PendingMove {
                    seq,
                    issue_id: drag.issue_id.clone(),
                    from_column: from.to_string(),
                    to_column: to.to_string(),
                    snapshot,
                })
            }
            None => {
                log::debug!("Reorder #{seq}: issue {} within {from}", drag.issue_id);
                DragOutcome::Reordered {
                    column_id: from.to_string(),
                    seq,
                }
            }
        }
    }

    /// Resolves a move once the server has answered.
    pub fn settle(
        &mut self,
        board: &mut BoardState,
        cache: &mut FetchCache,
        pending: PendingMove,
        result: Result<(), ApiError>,
    ) -> MoveSettlement {
        match result {
            Ok(()) => {
                // Local order stays provisional; the next read refreshes both columns.
                cache.invalidate(&pending.from_column);
                cache.invalidate(&pending.to_column);
                log::debug!("Move #{} confirmed", pending.seq);
                MoveSettlement::Confirmed
            }
            Err(err) => {
                let message = err.user_message(MOVE_FAILED_FALLBACK);
                if pending.seq == self.last_seq {
                    log::warn!("Move #{} failed, rolling back: {err}", pending.seq);
                    *board = pending.snapshot;
                    MoveSettlement::RolledBack { message }
                } else {
                    log::warn!(
                        "Move #{} failed after newer changes (latest #{}); resyncing: {err}",
                        pending.seq,
                        self.last_seq
                    );
                    cache.invalidate(&pending.from_column);
                    cache.invalidate(&pending.to_column);
                    MoveSettlement::Superseded { message }
                }
            }
        }
    }
}

/// Sends a pending move to the server.
pub async fn sync_move<R: BoardRemote>(remote: &R, pending: &PendingMove) -> Result<(), ApiError> {
    remote
        .update_issue_status(&pending.issue_id, &pending.to_column)
        .await
}

// The drag library reports an index; trust it only if it still points at the
// dragged issue, otherwise look the issue up by id.
fn resolve_source_index(issues: &[Issue], issue_id: &str, reported: usize) -> Option<usize> {
    match issues.get(reported) {
        Some(issue) if issue.id == issue_id => Some(reported),
        _ => issues.iter().position(|i| i.id == issue_id),
    }
}
