#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

use serde::{Deserialize, Serialize};

use super::issue::Issue;
use super::project::{null_as_empty, Project};

/// An invitation to join a project, as listed for its receiver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingInvite {
    #[serde(alias = "ID", alias = "_id")]
    pub id: String,
    #[serde(default, alias = "ProjectID")]
    pub project_id: String,
    #[serde(default, alias = "Status")]
    pub status: String,
    #[serde(default, alias = "senderName")]
    pub sender_name: Option<String>,
    #[serde(default, alias = "projectName")]
    pub project_name: Option<String>,
}

impl PendingInvite {
    pub fn is_pending(&self) -> bool {
        self.status.is_empty() || self.status.eq_ignore_ascii_case("pending")
    }

    pub fn summary(&self) -> String {
        format!(
            "{} invited you to {}",
            self.sender_name.as_deref().unwrap_or("Someone"),
            self.project_name.as_deref().unwrap_or("a project"),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Premium,
    Pro,
    #[default]
    #[serde(other)]
    Basic,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "Basic",
            PlanType::Premium => "Premium",
            PlanType::Pro => "Pro",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            PlanType::Basic => "$0",
            PlanType::Premium => "$49",
            PlanType::Pro => "$99",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            PlanType::Basic => &["3 Projects", "Basic Support"],
            PlanType::Premium => &["10 Projects", "Priority Support"],
            PlanType::Pro => &["Unlimited Projects", "24/7 Support"],
        }
    }

    /// `None` means unlimited.
    pub fn project_limit(&self) -> Option<usize> {
        match self {
            PlanType::Basic => Some(3),
            PlanType::Premium => Some(10),
            PlanType::Pro => None,
        }
    }

    pub fn all() -> Vec<PlanType> {
        vec![PlanType::Basic, PlanType::Premium, PlanType::Pro]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    #[serde(default)]
    pub plan_type: PlanType,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub subscription_end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "isverified")]
    pub is_verified: bool,
}

/// Payload of `GET /users/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserOverview {
    pub user: UserSummary,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default, rename = "project", deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(default, rename = "recentIssues", deserialize_with = "null_as_empty")]
    pub recent_issues: Vec<Issue>,
}

impl UserOverview {
    pub fn plan(&self) -> PlanType {
        self.subscription
            .as_ref()
            .map(|s| s.plan_type)
            .unwrap_or_default()
    }

    /// Whether the current plan still allows another project.
    pub fn can_create_project(&self) -> bool {
        self.plan()
            .project_limit()
            .map(|limit| self.projects.len() < limit)
            .unwrap_or(true)
    }
}
