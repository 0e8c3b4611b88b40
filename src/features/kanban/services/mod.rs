pub mod board_operations;
pub mod drag_session;
pub mod reorder;
#[cfg(test)]
mod test_support;

pub use board_operations::*;
pub use drag_session::DragSession;
pub use reorder::{sync_move, DragOutcome, MoveSettlement, PendingMove, ReorderCoordinator};
