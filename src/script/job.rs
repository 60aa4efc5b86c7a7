use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use super::error::ScriptError;
use super::notify::Notifier;
use super::runtime::{Script, ScriptRuntime};

/// One unit of work pulled off the durable queue.
///
/// Consumed exactly once per attempt; the queue's delivery guarantee is
/// at-least-once, so a retried attempt re-executes the script and re-sends a
/// notification. Scripts with external side effects must tolerate that.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    /// Target script; its stored code is replaced by `code` for this call.
    pub script: Script,

    /// Invoking user; outcome notifications are addressed here.
    pub user_id: String,

    /// Override source code (preview semantics, never persisted).
    pub code: String,

    /// Input data for the script.
    pub data: Value,

    /// Opaque correlation token echoed back in the outcome notification.
    pub watcher: Option<String>,

    /// Runtime configuration, empty by default.
    pub configuration: Value,
}

impl ExecutionRequest {
    pub fn new(
        script: Script,
        user_id: impl Into<String>,
        code: impl Into<String>,
        data: Value,
        watcher: Option<String>,
    ) -> Self {
        Self {
            script,
            user_id: user_id.into(),
            code: code.into(),
            data,
            watcher,
            configuration: json!({}),
        }
    }

    pub fn with_configuration(mut self, configuration: Value) -> Self {
        self.configuration = configuration;
        self
    }
}

/// Terminal outcome of one job attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionOutcome {
    /// 200 on success, 500 on any runtime failure.
    pub status: u16,

    /// Script result, or `{exception, message}` failure descriptor.
    pub response: Value,
}

impl ExecutionOutcome {
    pub fn success(response: Value) -> Self {
        Self {
            status: 200,
            response,
        }
    }

    pub fn failure(error: &ScriptError) -> Self {
        Self {
            status: 500,
            response: json!({
                "exception": error.kind(),
                "message": error.to_string(),
            }),
        }
    }
}

/// Queue-consumer job executing one untrusted script.
///
/// Total with respect to the runtime: any failure raised while running user
/// code is converted into a status-500 outcome, and exactly one notification
/// is emitted per attempt. A transport send failure is logged, never raised.
pub struct ExecuteScript {
    runtime: Arc<dyn ScriptRuntime>,
    notifier: Arc<dyn Notifier>,
}

impl ExecuteScript {
    pub fn new(runtime: Arc<dyn ScriptRuntime>, notifier: Arc<dyn Notifier>) -> Self {
        Self { runtime, notifier }
    }

    /// Run one attempt: mutate → run → notify, strictly sequential.
    pub async fn execute(&self, request: ExecutionRequest) {
        let ExecutionRequest {
            mut script,
            user_id,
            code,
            data,
            watcher,
            configuration,
        } = request;

        // Preview semantics: override the code for this call only, the stored
        // script definition is untouched.
        script.code = code;

        tracing::debug!(script_id = %script.id, user_id = %user_id, "executing script");

        let outcome = match self
            .runtime
            .run(&script.code, &data, &configuration)
            .await
        {
            Ok(response) => ExecutionOutcome::success(response),
            Err(error) => {
                tracing::debug!(script_id = %script.id, %error, "script failed");
                ExecutionOutcome::failure(&error)
            }
        };

        if let Err(error) = self.notifier.notify(&user_id, outcome, watcher).await {
            tracing::error!(user_id = %user_id, %error, "failed to deliver script outcome");
        }
    }
}
