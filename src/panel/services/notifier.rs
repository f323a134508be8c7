//! # Notifier
//!
//! Fire-and-forget user-facing messages (the console's toasts).

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Prints notifications to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✅ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {message}");
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
