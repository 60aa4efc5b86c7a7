use thiserror::Error;

/// Script runtime errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Compilation error: {0}")]
    CompilationError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("Execution timeout")]
    ExecutionTimeout,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ScriptError {
    /// Failure-kind descriptor carried in a status-500 notification.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptError::CompilationError(_) => "CompilationError",
            ScriptError::ExecutionError(_) => "ExecutionError",
            ScriptError::ExecutionTimeout => "ExecutionTimeout",
            ScriptError::SerializationError(_) => "SerializationError",
            ScriptError::RuntimeUnavailable(_) => "RuntimeUnavailable",
            ScriptError::InternalError(_) => "InternalError",
        }
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::SerializationError(e.to_string())
    }
}

/// Notification transport errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification send error: {0}")]
    SendError(String),
}
