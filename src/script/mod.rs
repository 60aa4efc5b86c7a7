//! Script Execution Module
//!
//! Runs untrusted automation scripts as fire-and-forget jobs. Each attempt
//! reaches exactly one terminal state and emits exactly one outcome
//! notification, correlated to the originating request by an opaque watcher
//! token. The runtime and the notification transport are both traits; this
//! module owns only the mutate → run → notify sequence.

pub mod error;
pub mod job;
pub mod notify;
pub mod runtime;

pub use error::{NotifyError, ScriptError};
pub use job::{ExecuteScript, ExecutionOutcome, ExecutionRequest};
pub use notify::{
    create_notification_channel, ChannelNotifier, NotificationReceiver, NotificationSender,
    Notifier, ScriptResponseEvent,
};
pub use runtime::{Script, ScriptRuntime};
