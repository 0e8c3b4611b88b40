//! Board changes other than drag-and-drop.
//!
//! The async halves talk to the server; the `apply_*` halves fold a result
//! into local state and are what the hook calls once a request resolves.

#[cfg(test)]
#[path = "board_operations_test.rs"]
mod board_operations_test;

use chrono::{DateTime, Utc};

use super::reorder::ReorderCoordinator;
use crate::core::models::{BoardState, Issue, ProjectDetail, StatusColumn, MAX_STATUS_COLUMNS};
use crate::core::services::{ApiError, BoardRemote, FetchCache};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total_issues: usize,
    pub members: usize,
    pub columns: usize,
}

pub fn project_stats(detail: &ProjectDetail, board: &BoardState) -> ProjectStats {
    ProjectStats {
        total_issues: board.total_issues(),
        members: detail.members.len(),
        columns: detail.columns.len(),
    }
}

/// An empty board with one sequence per project column.
pub fn board_for(detail: &ProjectDetail) -> BoardState {
    BoardState::with_columns(detail.column_ids())
}

// Fetch each claimed column in turn; one failure does not stop the rest
pub async fn load_columns<R: BoardRemote>(
    remote: &R,
    column_ids: Vec<String>,
) -> Vec<(String, Result<Vec<Issue>, ApiError>)> {
    let mut results = Vec::with_capacity(column_ids.len());
    for column_id in column_ids {
        let result = remote.issues_for_status(&column_id).await;
        results.push((column_id, result));
    }
    results
}

/// Folds one column load into the board. Returns `true` if the board changed.
pub fn apply_column_load(
    board: &mut BoardState,
    cache: &mut FetchCache,
    coordinator: &mut ReorderCoordinator,
    column_id: &str,
    result: Result<Vec<Issue>, ApiError>,
    now: DateTime<Utc>,
) -> bool {
    match result {
        Ok(issues) if board.has_column(column_id) => {
            board.replace_column(column_id, issues);
            cache.mark_fetched(column_id, now);
            coordinator.record_mutation();
            true
        }
        Ok(_) => {
            // Column was deleted while its issues were loading.
            cache.invalidate(column_id);
            false
        }
        Err(err) => {
            log::error!("Failed to fetch issues for status {column_id}: {err}");
            cache.mark_failed(column_id, now);
            false
        }
    }
}

pub fn validate_issue_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please input title".to_string());
    }
    Ok(title.to_string())
}

pub fn validate_column_name(detail: &ProjectDetail, name: &str) -> Result<String, String> {
    if !detail.can_add_column() {
        return Err(format!(
            "A project can have at most {MAX_STATUS_COLUMNS} status columns"
        ));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a name for this status column".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_invite_email(email: &str) -> Result<String, String> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);
    if !valid {
        return Err("Please enter a valid email!".to_string());
    }
    Ok(email.to_string())
}

pub fn apply_created_issue(
    board: &mut BoardState,
    coordinator: &mut ReorderCoordinator,
    column_id: &str,
    mut issue: Issue,
) {
    if issue.status.is_empty() {
        issue.status = column_id.to_string();
    }
    board.push_issue(column_id, issue);
    coordinator.record_mutation();
}

pub fn apply_deleted_issue(
    board: &mut BoardState,
    coordinator: &mut ReorderCoordinator,
    issue_id: &str,
) -> bool {
    let removed = board.remove_issue(issue_id).is_some();
    if removed {
        coordinator.record_mutation();
    }
    removed
}

/// A new column starts empty, so it counts as fetched.
pub fn apply_added_column(
    detail: &mut ProjectDetail,
    board: &mut BoardState,
    cache: &mut FetchCache,
    column: StatusColumn,
    now: DateTime<Utc>,
) {
    board.ensure_column(&column.id);
    cache.mark_fetched(&column.id, now);
    detail.add_column(column);
}

pub fn apply_removed_column(
    detail: &mut ProjectDetail,
    board: &mut BoardState,
    cache: &mut FetchCache,
    coordinator: &mut ReorderCoordinator,
    column_id: &str,
) {
    detail.remove_column(column_id);
    if board.drop_column(column_id).is_some() {
        coordinator.record_mutation();
    }
    cache.invalidate(column_id);
}
