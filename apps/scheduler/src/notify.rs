//! Run notifications and the sinks that receive them.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum NotificationKind {
    Success {
        #[serde(rename = "bankCount")]
        bank_count: usize,
    },
    Failure { error: String },
}

/// Outcome of one scheduled run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn success(bank_count: usize) -> Self {
        Self {
            kind: NotificationKind::Success { bank_count },
            timestamp: Utc::now(),
        }
    }

    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            kind: NotificationKind::Failure {
                error: error.to_string(),
            },
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, NotificationKind::Success { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NotificationKind::Success { bank_count } => write!(
                f,
                "Weekly bank data scrape completed successfully. Found {} banks.",
                bank_count
            ),
            NotificationKind::Failure { error } => {
                write!(f, "Weekly bank data scrape failed: {}", error)
            }
        }
    }
}

/// Receives the outcome of every scheduled run.
///
/// `notify()` must not block and must not fail the run; delivery is
/// best-effort.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Clone, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        if notification.is_success() {
            info!("{}", notification);
        } else {
            error!("{}", notification);
        }
    }
}

/// Collects notifications in memory.
#[derive(Clone, Default)]
pub struct RecordingNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
