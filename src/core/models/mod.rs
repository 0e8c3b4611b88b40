pub mod board;
pub mod invite;
pub mod issue;
pub mod project;

pub use board::{BoardState, DragEnd, DragLocation};
pub use invite::{PendingInvite, PlanType, Subscription, UserOverview, UserSummary};
pub use issue::{Issue, NewIssue, Priority};
pub use project::{Member, Project, ProjectDetail, StatusColumn, MAX_STATUS_COLUMNS};
