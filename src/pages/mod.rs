pub mod dashboard;
pub mod login;
pub mod project_detail;

pub use dashboard::Dashboard;
pub use login::Login;
pub use project_detail::ProjectDetail;
