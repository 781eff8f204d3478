//! Data-quality notices raised during a write.
//!
//! Writers report non-fatal problems (unknown note type, suppressed role,
//! missing authority) as [`Notice`] values sent to a caller-supplied
//! [`DiagnosticsSink`]. Sends are fire-and-forget: a sink must never block
//! the write or turn a notice into an error.
//!
//! [`NoticeLog`] is the standard collector; hosts that stream diagnostics
//! elsewhere implement the trait themselves.

use serde::{Deserialize, Serialize};

/// Severity of a notice, for downstream display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A single data-quality notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub message: String,
    /// Which writer raised it (e.g. "contributor", "event").
    pub component: &'static str,
}

impl Notice {
    pub fn info(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            component,
        }
    }

    pub fn warning(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            component,
        }
    }
}

/// Receiver for data-quality notices.
pub trait DiagnosticsSink {
    /// Accept a notice. Must not block or fail.
    fn notify(&mut self, notice: Notice);
}

/// Vec-backed sink for callers that inspect notices after the write.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected notices, in emission order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }
}

impl DiagnosticsSink for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Sink that drops every notice. Useful when the caller does not care.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn notify(&mut self, _notice: Notice) {}
}
