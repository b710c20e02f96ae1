use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::ToolError;
use crate::mcp::catalog::validate_tool_args;
use crate::mcp::envelope::{build_error_result, build_success_result};
use crate::services::logger::Logger;

/// Serves the tools of one resource group. `tool` is the catalog name the
/// call was routed by; `args` have already passed schema validation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError>;
}

/// Routes tool calls by name and turns every outcome into a result envelope.
#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: HashMap<String, Arc<dyn ToolHandler>>) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
        }
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.handlers.contains_key(tool)
    }

    /// Never fails: errors come back as `{ "error": true, "message": ... }`.
    pub async fn execute(&self, tool: &str, args: Value) -> Value {
        let call_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();
        let outcome = self.dispatch(tool, args).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                self.logger.debug(
                    "Tool call succeeded",
                    Some(&serde_json::json!({
                        "call_id": call_id,
                        "tool": tool,
                        "duration_ms": duration_ms,
                    })),
                );
                build_success_result(&result)
            }
            Err(err) => {
                self.logger.warn(
                    "Tool call failed",
                    Some(&serde_json::json!({
                        "call_id": call_id,
                        "tool": tool,
                        "duration_ms": duration_ms,
                        "kind": err.kind,
                        "code": err.code,
                        "message": err.message,
                    })),
                );
                build_error_result(&err.message)
            }
        }
    }

    async fn dispatch(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let handler = self
            .handlers
            .get(tool)
            .cloned()
            .ok_or_else(|| ToolError::unknown_tool(tool))?;
        let args = normalize_args(args);
        validate_tool_args(tool, &args)?;
        handler.handle(tool, args).await
    }
}

/// Absent arguments arrive as `null`; handlers always see an object.
fn normalize_args(args: Value) -> Value {
    match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::envelope::result_text;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ToolHandler for CountingHandler {
        async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::json!({ "tool": tool, "args": args }))
        }
    }

    fn executor(calls: Arc<AtomicUsize>) -> ToolExecutor {
        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        handlers.insert(
            "sevalla_get_application".to_string(),
            Arc::new(CountingHandler { calls }),
        );
        ToolExecutor::new(Logger::new("test"), handlers)
    }

    fn parse(result: &Value) -> Value {
        serde_json::from_str(result_text(result).expect("text")).expect("json")
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_without_calling_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = executor(calls.clone())
            .execute("sevalla_nonexistent", Value::Null)
            .await;
        assert_eq!(
            parse(&result),
            serde_json::json!({"error": true, "message": "Unknown tool: sevalla_nonexistent"})
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_arguments_never_reach_the_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = executor(calls.clone())
            .execute("sevalla_get_application", Value::Null)
            .await;
        let parsed = parse(&result);
        assert_eq!(parsed["error"], true);
        assert!(parsed["message"]
            .as_str()
            .unwrap()
            .contains("missing required field 'app_id'"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_call_is_routed_by_name() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = executor(calls.clone())
            .execute(
                "sevalla_get_application",
                serde_json::json!({"app_id": "app-1"}),
            )
            .await;
        assert_eq!(
            parse(&result),
            serde_json::json!({"tool": "sevalla_get_application", "args": {"app_id": "app-1"}})
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
