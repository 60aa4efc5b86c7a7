//! # Scriptflow — Script Execution and Form Data Sanitization
//!
//! `scriptflow` sits at the boundary where user-authored automation code runs
//! and where user-supplied structured data is rendered back to other users.
//! It has two responsibilities:
//!
//! - **Script execution**: run an untrusted, possibly-failing script
//!   asynchronously and guarantee the invoking user receives exactly one
//!   terminal outcome notification, correlated to the originating request by
//!   an opaque watcher token.
//! - **Sanitization**: recursively defang arbitrary nested form payloads
//!   against markup and template injection, while honoring a narrow,
//!   explicitly declared set of top-level rich-text fields that keep their
//!   markup across submit → store → redisplay round trips.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use serde_json::json;
//! use scriptflow::{
//!     create_notification_channel, sanitize_data, ChannelNotifier, ExecuteScript,
//!     ExecutionRequest, Script,
//! };
//!
//! # async fn demo(runtime: Arc<dyn scriptflow::ScriptRuntime>) {
//! let data = sanitize_data(&json!({"name": "<b>Ada</b>"}), None);
//!
//! let (sender, _receiver) = create_notification_channel();
//! let job = ExecuteScript::new(runtime, Arc::new(ChannelNotifier::new(sender)));
//! let script = Script::new("s1", "Lookup", "javascript", "return {};");
//! job.execute(ExecutionRequest::new(script, "user1", "return {};", data, None))
//!     .await;
//! # }
//! ```
//!
//! The script runtime and the notification transport are trait objects
//! ([`ScriptRuntime`], [`Notifier`]); the durable queue feeding
//! [`ExecuteScript`] jobs is external and assumed at-least-once.

pub mod sanitizer;
pub mod screen;
pub mod script;

pub use sanitizer::{
    sanitize, sanitize_data, sanitize_email, sanitize_phone_number, sanitize_string,
    DENYLISTED_TAGS, DO_NOT_SANITIZE_KEY,
};
pub use screen::{ScreenDefinition, ScreenPage, RICH_TEXT_COMPONENT};
pub use script::{
    create_notification_channel, ChannelNotifier, ExecuteScript, ExecutionOutcome,
    ExecutionRequest, NotificationReceiver, NotificationSender, Notifier, NotifyError, Script,
    ScriptError, ScriptResponseEvent, ScriptRuntime,
};
