#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashMap;

use super::issue::Issue;

/// Client-held mapping of status column id to its ordered issues.
///
/// A read-through cache of server state: columns are filled lazily from
/// `GET /issue/get/{statusId}` and mutated optimistically on drag events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    columns: HashMap<String, Vec<Issue>>,
}

impl BoardState {
    pub fn with_columns<I, S>(column_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: column_ids.into_iter().map(|id| (id.into(), Vec::new())).collect(),
        }
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.columns.contains_key(column_id)
    }

    pub fn column(&self, column_id: &str) -> &[Issue] {
        self.columns.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Vec<Issue>> {
        self.columns.get_mut(column_id)
    }

    pub fn ensure_column(&mut self, column_id: &str) {
        self.columns.entry(column_id.to_string()).or_default();
    }

    pub fn replace_column(&mut self, column_id: &str, issues: Vec<Issue>) {
        self.columns.insert(column_id.to_string(), issues);
    }

    pub fn drop_column(&mut self, column_id: &str) -> Option<Vec<Issue>> {
        self.columns.remove(column_id)
    }

    pub fn push_issue(&mut self, column_id: &str, issue: Issue) {
        self.columns.entry(column_id.to_string()).or_default().push(issue);
    }

    /// Removes an issue wherever it lives, returning its column and the issue.
    pub fn remove_issue(&mut self, issue_id: &str) -> Option<(String, Issue)> {
        for (column_id, issues) in self.columns.iter_mut() {
            if let Some(pos) = issues.iter().position(|i| i.id == issue_id) {
                return Some((column_id.clone(), issues.remove(pos)));
            }
        }
        None
    }

    pub fn locate(&self, issue_id: &str) -> Option<DragLocation> {
        self.columns.iter().find_map(|(column_id, issues)| {
            issues
                .iter()
                .position(|i| i.id == issue_id)
                .map(|index| DragLocation::new(column_id.clone(), index))
        })
    }

    pub fn total_issues(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Issue ids per column, handy for comparing layouts.
    pub fn layout(&self, column_id: &str) -> Vec<&str> {
        self.column(column_id).iter().map(|i| i.id.as_str()).collect()
    }
}

/// A slot on the board: a column and a position inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// The drag-end event emitted by the board.
///
/// `destination` is `None` when the card was released outside any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub issue_id: String,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    pub fn is_cross_column(&self) -> bool {
        self.destination
            .as_ref()
            .map(|d| d.column_id != self.source.column_id)
            .unwrap_or(false)
    }

    pub fn is_in_place(&self) -> bool {
        self.destination.as_ref() == Some(&self.source)
    }
}
