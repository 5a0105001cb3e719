//! Frontend Models
//!
//! View-only data structures that are not part of the order model.

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown above the menu editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number, so an old dismiss timer can't clear a newer notice
    pub seq: u32,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Error => "alert alert-danger",
        }
    }
}
