#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// UI policy: a project never shows more than this many status columns.
pub const MAX_STATUS_COLUMNS: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusColumn {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    #[serde(default, rename = "issues_id", deserialize_with = "null_as_empty")]
    pub issue_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

impl Member {
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// Payload of `GET /project/projects/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    #[serde(default, rename = "statutes", deserialize_with = "null_as_empty")]
    pub columns: Vec<StatusColumn>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<Member>,
}

impl ProjectDetail {
    pub fn can_add_column(&self) -> bool {
        self.columns.len() < MAX_STATUS_COLUMNS
    }

    pub fn column_ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn column(&self, column_id: &str) -> Option<&StatusColumn> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn add_column(&mut self, column: StatusColumn) {
        if !self.columns.iter().any(|c| c.id == column.id) {
            self.columns.push(column);
        }
    }

    pub fn remove_column(&mut self, column_id: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != column_id);
        self.columns.len() < before
    }

    pub fn remove_member(&mut self, member_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != member_id);
        self.members.len() < before
    }
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
