//! Notification boundary

use std::time::Duration;

/// Auto-dismiss duration applied to success notifications
pub const SUCCESS_DISMISS: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

/// One user-facing message. Errors stay up until dismissed; successes
/// auto-dismiss after [`SUCCESS_DISMISS`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            auto_dismiss: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            auto_dismiss: Some(SUCCESS_DISMISS),
        }
    }
}

/// Sink for user-facing notifications. The panel front end backs this with
/// its toast UI; headless callers can log or record them.
pub trait Notifier {
    fn notify(&self, note: Notification);
}

impl<'a, N: Notifier + ?Sized> Notifier for &'a N {
    fn notify(&self, note: Notification) {
        (**self).notify(note)
    }
}

/// Notifier that routes messages to the tracing output
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, note: Notification) {
        match note.severity {
            Severity::Error => tracing::error!(message = %note.message, "notification"),
            Severity::Success => tracing::info!(message = %note.message, "notification"),
        }
    }
}
