use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use super::error::NotifyError;
use super::job::ExecutionOutcome;

/// Outcome notification delivered to the invoking user's channel.
#[derive(Clone, Debug, Serialize)]
pub struct ScriptResponseEvent {
    /// Invoking user identity.
    pub user_id: String,

    /// 200 on success, 500 on any runtime failure.
    pub status: u16,

    /// Script result, or `{exception, message}` on failure.
    pub response: serde_json::Value,

    /// Opaque correlation token from the originating request, so a client
    /// watching several in-flight executions can match results to requests.
    pub watcher: Option<String>,

    pub timestamp: DateTime<Utc>,
}

/// Consumer capability for delivering execution outcomes.
///
/// The real transport (push, email, socket) lives outside this crate; jobs
/// only see this trait.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        user_id: &str,
        outcome: ExecutionOutcome,
        watcher: Option<String>,
    ) -> Result<(), NotifyError>;
}

/// Notification sender half
pub type NotificationSender = mpsc::UnboundedSender<ScriptResponseEvent>;

/// Notification receiver half
pub type NotificationReceiver = mpsc::UnboundedReceiver<ScriptResponseEvent>;

/// Create an in-process notification channel.
pub fn create_notification_channel() -> (NotificationSender, NotificationReceiver) {
    mpsc::unbounded_channel()
}

/// [`Notifier`] backed by an in-process channel; the receiving half is owned
/// by whatever forwards events to the real transport.
pub struct ChannelNotifier {
    sender: NotificationSender,
}

impl ChannelNotifier {
    pub fn new(sender: NotificationSender) -> Self {
        Self { sender }
    }
}

#[async_trait::async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(
        &self,
        user_id: &str,
        outcome: ExecutionOutcome,
        watcher: Option<String>,
    ) -> Result<(), NotifyError> {
        self.sender
            .send(ScriptResponseEvent {
                user_id: user_id.to_string(),
                status: outcome.status,
                response: outcome.response,
                watcher,
                timestamp: Utc::now(),
            })
            .map_err(|e| NotifyError::SendError(e.to_string()))
    }
}
