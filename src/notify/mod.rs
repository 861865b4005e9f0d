//! Transient user notifications.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Short marker shown in front of the message.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Success => "✓",
            Severity::Warning => "!",
            Severity::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.icon(), self.message)
    }
}

/// Receiver of transient notices emitted by session operations.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Queue of notices, drained by whoever renders them.
#[derive(Debug, Default)]
pub struct Notices {
    pending: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notice, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for Notices {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.pending.push(Notice {
            message: message.to_string(),
            severity,
        });
    }
}
