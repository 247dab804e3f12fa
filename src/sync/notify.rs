//! User-facing notification service
//!
//! Flows emit notices through an injected [`Notifier`] instead of printing
//! directly, so feedback stays decoupled from the synchronization logic.
//! Commands inject [`UiNotifier`]; tests inject [`MemoryNotifier`] and
//! assert on what was emitted.

use std::sync::{Arc, Mutex};

use crate::ui::{self, UiContext};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One user-facing notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Sink for user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Error,
            message: message.to_string(),
        });
    }
}

/// Notifier that renders through the terminal UI helpers
pub struct UiNotifier {
    ctx: UiContext,
}

impl UiNotifier {
    pub fn new(ctx: UiContext) -> Self {
        Self { ctx }
    }
}

impl Notifier for UiNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => ui::step_ok(&self.ctx, &notice.message),
            NoticeKind::Error => ui::step_error(&self.ctx, &notice.message),
        }
    }
}

/// Notifier that collects notices in memory; used by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Error)
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }
}
