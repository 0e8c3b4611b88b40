use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::models::{BoardState, DragEnd, DragLocation, Issue, Priority};
use crate::core::services::{ApiError, BoardRemote};

pub fn issue(id: &str, column: &str) -> Issue {
    Issue {
        id: id.to_string(),
        title: format!("Issue {id}"),
        description: String::new(),
        status: column.to_string(),
        project_id: "p-1".to_string(),
        priority: Priority::Default,
        due_date: None,
        tags: Vec::new(),
    }
}

/// `{"todo": [A, B], "doing": []}`
pub fn todo_doing_board() -> BoardState {
    let mut board = BoardState::with_columns(["todo", "doing"]);
    board.push_issue("todo", issue("A", "todo"));
    board.push_issue("todo", issue("B", "todo"));
    board
}

pub fn drag(issue_id: &str, from: (&str, usize), to: Option<(&str, usize)>) -> DragEnd {
    DragEnd {
        issue_id: issue_id.to_string(),
        source: DragLocation::new(from.0, from.1),
        destination: to.map(|(column, index)| DragLocation::new(column, index)),
    }
}

/// In-memory stand-in for the REST API.
#[derive(Default)]
pub struct FakeRemote {
    pub fail_with: Option<ApiError>,
    pub columns: HashMap<String, Vec<Issue>>,
    pub status_updates: RefCell<Vec<(String, String)>>,
    pub column_reads: RefCell<Vec<String>>,
}

impl FakeRemote {
    pub fn failing(err: ApiError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn update_count(&self) -> usize {
        self.status_updates.borrow().len()
    }
}

impl BoardRemote for FakeRemote {
    async fn issues_for_status(&self, status_id: &str) -> Result<Vec<Issue>, ApiError> {
        self.column_reads.borrow_mut().push(status_id.to_string());
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(self.columns.get(status_id).cloned().unwrap_or_default())
    }

    async fn update_issue_status(&self, issue_id: &str, status_id: &str) -> Result<(), ApiError> {
        self.status_updates
            .borrow_mut()
            .push((issue_id.to_string(), status_id.to_string()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
