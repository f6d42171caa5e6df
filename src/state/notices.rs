//! Flash-notice state for the alert stack.
//!
//! DESIGN
//! ======
//! Mirrors server-side flash semantics: pages push localized messages and
//! the alert stack renders and expires them independently of page state.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Visual category of a notice, mapped onto alert banner classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    /// CSS classes rendered on the banner element. The leading `alert`
    /// class is what the page-binding auto-dismissal selector matches.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "alert alert--info",
            Self::Success => "alert alert--success",
            Self::Error => "alert alert--error",
        }
    }
}

/// A single dismissible notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Shared flash-notice stack.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    pub items: Vec<Notice>,
}

impl NoticesState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove the notice with `id`, if still present.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|notice| notice.id != id);
    }
}
