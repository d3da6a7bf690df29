use std::time::{Duration, Instant};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn label(self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

/// A transient toast shown after an export or chat action.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
    pub timeout: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self::timed(message, level, DEFAULT_TIMEOUT)
    }

    /// Caller-supplied display duration.
    pub fn timed(message: impl Into<String>, level: NotificationLevel, timeout: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            timeout,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.timeout
    }

    pub fn remaining_time(&self) -> Duration {
        self.timeout.saturating_sub(self.created_at.elapsed())
    }
}

/// Owns the one visible toast.
///
/// Export front-ends report outcomes here instead of touching the display
/// directly; the UI loop polls `update` to auto-dismiss expired toasts and
/// may dismiss explicitly at any time.
#[derive(Debug, Default, Clone)]
pub struct NotificationManager {
    current: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show(Notification::info(message));
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show(Notification::warning(message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drops an expired toast. Returns true when one was dismissed.
    pub fn update(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut manager = NotificationManager::new();
        assert!(!manager.has_notification());

        manager.show_info("Copied message to clipboard");
        assert_eq!(
            manager.current().map(|n| n.level),
            Some(NotificationLevel::Info)
        );

        manager.dismiss();
        assert!(!manager.has_notification());
    }

    #[test]
    fn test_newer_notification_replaces_older() {
        let mut manager = NotificationManager::new();
        manager.show_info("first");
        manager.show_error("second");
        let current = manager.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.level, NotificationLevel::Error);
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let mut manager = NotificationManager::new();
        manager.show(Notification::timed(
            "gone",
            NotificationLevel::Info,
            Duration::from_secs(0),
        ));
        std::thread::sleep(Duration::from_millis(5));
        assert!(manager.update());
        assert!(!manager.has_notification());
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let notification = Notification::info("fresh");
        assert!(!notification.is_expired());
        assert!(notification.remaining_time() > Duration::from_secs(3));
    }
}
