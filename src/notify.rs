//! Notification sink for user-facing failure notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reports each failed call here exactly once. A console UI
//! renders notices as transient toasts; the CLI prints them; tests record
//! them.

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;

use std::sync::Mutex;

pub trait NotificationSink: Send + Sync {
    /// Surface one error notice to the user.
    fn error(&self, message: &str);
}

/// Sink that forwards notices to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::warn!(notice = message, "request failed");
    }
}

/// Sink that keeps every notice in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<String>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().map(|notices| notices.clone()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn error(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_owned());
        }
    }
}
