#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::config::AppConfig;

/// Oldest notices are dropped past this many.
pub const MAX_VISIBLE_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
            NoticeKind::Info => "notice-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.items.len() - MAX_VISIBLE_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handle components use to raise notices; cheap to copy into closures.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(queue: RwSignal<NoticeQueue>, config: &AppConfig) -> Self {
        Self {
            queue,
            ttl_ms: config.notice_ttl_ms,
        }
    }

    pub fn queue(&self) -> RwSignal<NoticeQueue> {
        self.queue
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text.into());
    }

    // Show a notice and schedule its removal after the configured TTL
    fn show(&self, kind: NoticeKind, text: String) {
        match kind {
            NoticeKind::Error => log::warn!("notice: {text}"),
            _ => log::info!("notice: {text}"),
        }
        let queue = self.queue;
        let ttl = self.ttl_ms;
        if let Some(id) = queue.try_update(|q| q.push(kind, text)) {
            spawn_local(async move {
                TimeoutFuture::new(ttl).await;
                queue.try_update(|q| q.dismiss(id));
            });
        }
    }
}
