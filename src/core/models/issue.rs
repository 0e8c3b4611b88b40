#[cfg(test)]
#[path = "issue_test.rs"]
mod issue_test;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::project::null_as_empty;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Medium,
    High,
    Urgent,
    Critical,
    #[default]
    #[serde(other)]
    Default,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Default => "Default",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
            Priority::Critical => "Critical",
        }
    }

    /// Wire value, as accepted by the create-issue endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Default => "DEFAULT",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
            Priority::Critical => "CRITICAL",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .unwrap_or_default()
    }

    /// CSS modifier used by the issue card badge.
    pub fn tone(&self) -> &'static str {
        match self {
            Priority::Urgent | Priority::Critical => "red",
            Priority::High => "orange",
            Priority::Medium => "gold",
            Priority::Default => "green",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![
            Priority::Default,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
            Priority::Critical,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Owning status column.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(
        default,
        deserialize_with = "blank_date",
        serialize_with = "plain_date"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl Issue {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.map(|due| due < today).unwrap_or(false)
    }
}

/// Body of `POST /issue/create-issue`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(serialize_with = "plain_date")]
    pub due_date: Option<NaiveDate>,
    pub status_id: String,
    pub project_id: String,
}

impl NewIssue {
    pub fn new(project_id: String, status_id: String, title: String) -> Self {
        Self {
            title,
            description: String::new(),
            priority: Priority::Default,
            due_date: None,
            status_id,
            project_id,
        }
    }
}

// The server stores due dates as free-form text, normally "YYYY-MM-DD" or "".
// Anything else reads as no due date so one bad row cannot sink its column.
fn blank_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).and_then(parse_due_date))
}

fn parse_due_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    // Tolerate full timestamps by keeping the date part.
    let date_part = text.get(..10).unwrap_or(text);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Ignoring unreadable due date {text:?}: {err}");
            None
        }
    }
}

fn plain_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_none(),
    }
}
