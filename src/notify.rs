//! Outcome notifications: a fire-and-forget sink for human-readable messages.

/// How the message should be presented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// Surface for outcome messages. No return value: the caller never depends
/// on delivery.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Routes notifications to the process log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::warn!("{title}: {message}"),
            Severity::Success | Severity::Info => log::info!("{title}: {message}"),
        }
    }
}

/// Discards everything (tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _message: &str, _severity: Severity) {}
}
