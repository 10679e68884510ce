//! Host UI capabilities.
//!
//! Narrow interfaces over the host's dialog system and external URL handling.
//! Both are injected at vault construction so the vault can be exercised with
//! stand-ins in tests.

use async_trait::async_trait;

/// Presents an error message to the user with zero or more labeled actions.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `message` with the given action labels. Resolves to the label the
    /// user picked, or `None` if the notification was dismissed.
    async fn show_error(&self, message: &str, actions: &[&str]) -> Option<String>;
}

/// Opens a URI in the user's preferred external handler.
pub trait UrlOpener: Send + Sync {
    /// Fire-and-forget; the host does not report whether navigation succeeded.
    fn open_url(&self, url: &str);
}
