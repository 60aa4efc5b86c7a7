use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ScriptError;

/// Script execution interface
///
/// All runtime implementations (in-process interpreter, container service,
/// remote call, etc.) must implement this trait.
#[async_trait::async_trait]
pub trait ScriptRuntime: Send + Sync {
    /// Run `code` against `data` with the given `config`.
    ///
    /// # Returns
    /// - `Ok(Value)`: the script's result payload
    /// - `Err(ScriptError)`: any failure raised while running user code
    async fn run(&self, code: &str, data: &Value, config: &Value) -> Result<Value, ScriptError>;
}

/// An automation script as stored by the process definition.
///
/// `code` is what the runtime executes; a job may override it in memory for a
/// single call without persisting (preview semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub id: String,
    pub title: String,
    pub language: String,
    pub code: String,
}

impl Script {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            language: language.into(),
            code: code.into(),
        }
    }
}
