use crate::Console;

/// One outbound channel for customer-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Default)]
pub struct EmailNotification {
    console: Console,
}

impl EmailNotification {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Notifier for EmailNotification {
    fn notify(&self, message: &str) {
        tracing::debug!(channel = "email", "Sending notification");
        self.console.line(format!("[Email] {}", message));
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsNotification {
    console: Console,
}

impl SmsNotification {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Notifier for SmsNotification {
    fn notify(&self, message: &str) {
        tracing::debug!(channel = "sms", "Sending notification");
        self.console.line(format!("[SMS] {}", message));
    }
}
