//! Toast-style notifications shown to the user.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A short message produced by a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Ошибка".to_string(),
            message: message.into(),
        }
    }

    /// Whether this reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
