use crate::{LoaderSnapshot, Notification};

/// A trait for publishing the loader state to the presentation layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StatePublisher: Sync + Send {
    /// Publishes a snapshot, returns `false` if it was discarded as stale.
    async fn publish(&self, snapshot: LoaderSnapshot) -> bool;
}

/// A trait for raising transient notifications to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Sync + Send {
    /// Raises the notification.
    fn notify(&self, notification: &Notification);
}
