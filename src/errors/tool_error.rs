use crate::errors::ApiError;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidParams,
    Denied,
    NotFound,
    Retryable,
    Internal,
}

/// Error raised while serving one tool call. Its `message` is what the caller
/// sees in the `{ "error": true, "message": ... }` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, "INVALID_PARAMS", message)
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(
            ToolErrorKind::NotFound,
            "UNKNOWN_TOOL",
            format!("Unknown tool: {}", name),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<ApiError> for ToolError {
    fn from(err: ApiError) -> Self {
        let (kind, code) = match &err {
            ApiError::Authentication { .. } => (ToolErrorKind::Denied, "AUTHENTICATION_FAILED"),
            ApiError::Remote { .. } => (ToolErrorKind::Retryable, "API_ERROR"),
            ApiError::Transport(_) => (ToolErrorKind::Retryable, "TRANSPORT"),
            ApiError::RetriesExhausted { .. } => (ToolErrorKind::Retryable, "RETRIES_EXHAUSTED"),
            ApiError::Encode(_) => (ToolErrorKind::InvalidParams, "ENCODE"),
            ApiError::Setup(_) => (ToolErrorKind::Internal, "SETUP"),
        };
        let status = err.status();
        let out = ToolError::new(kind, code, err.to_string());
        match status {
            Some(status) => out.with_details(serde_json::json!({ "status": status })),
            None => out,
        }
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}
