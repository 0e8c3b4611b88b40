pub mod components;
pub mod notices;

pub use components::NoticeStack;
pub use notices::{Notice, NoticeKind, NoticeQueue, Notifier};
