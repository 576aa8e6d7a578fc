//! User-facing notification abstraction.

/// Fire-and-forget transient messages (toasts, status lines).
pub trait Notifier {
    /// Show a short message to the user.
    fn show_message(&mut self, text: &str);
}
