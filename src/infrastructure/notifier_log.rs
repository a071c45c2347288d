use log::{error, info};

use crate::{Notification, NotificationStatus, Notifier};

/// Raises notifications through the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.status {
            NotificationStatus::Error => error!(
                "{}: {} (for {:?})",
                notification.title, notification.description, notification.duration
            ),
            NotificationStatus::Info => info!(
                "{}: {} (for {:?})",
                notification.title, notification.description, notification.duration
            ),
        }
    }
}
