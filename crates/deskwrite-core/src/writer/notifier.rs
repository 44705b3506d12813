//! Success notification channel.

use tracing::info;

/// Receives one message per successfully written entry.
pub trait Notifier {
    fn success(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn success(&self, message: &str) {
        (**self).success(message)
    }
}

/// Forwards success messages to `tracing` at INFO on target `deskwrite::success`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "deskwrite::success", "{}", message);
    }
}
