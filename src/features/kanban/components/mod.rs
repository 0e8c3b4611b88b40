pub mod column;
pub mod column_form;
pub mod header;
pub mod issue_card;
pub mod issue_modal;
pub mod members_modal;

pub use column::KanbanColumn;
pub use column_form::AddColumnForm;
pub use header::ProjectHeader;
pub use issue_card::IssueCard;
pub use issue_modal::IssueModal;
pub use members_modal::MembersModal;
