use serde_json::{json, Value};

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `tools/call` result carrying one text block.
pub fn build_text_result(text: String) -> Value {
    json!({ "content": [ { "type": "text", "text": text } ] })
}

pub fn build_success_result(value: &Value) -> Value {
    build_text_result(pretty(value))
}

pub fn build_error_result(message: &str) -> Value {
    build_text_result(pretty(&json!({ "error": true, "message": message })))
}

/// Fixed acknowledgment for operations whose API response carries nothing.
pub fn deletion_ack(resource: &str) -> Value {
    json!({ "success": true, "message": format!("{} deleted", resource) })
}

/// Text of the first content block, if any.
pub fn result_text(result: &Value) -> Option<&str> {
    result
        .get("content")
        .and_then(|v| v.as_array())
        .and_then(|items| items.first())
        .and_then(|item| item.get("text"))
        .and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_pretty_printed_text() {
        let result = build_success_result(&json!({"company": {"users": []}}));
        assert_eq!(result["content"][0]["type"], "text");
        let text = result_text(&result).expect("text");
        assert!(text.contains("\n  \"company\""));
        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, json!({"company": {"users": []}}));
    }

    #[test]
    fn errors_are_flagged_objects() {
        let result = build_error_result("Unknown tool: sevalla_nope");
        let parsed: Value = serde_json::from_str(result_text(&result).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({"error": true, "message": "Unknown tool: sevalla_nope"})
        );
    }

    #[test]
    fn deletion_ack_names_the_resource() {
        assert_eq!(
            deletion_ack("Static site"),
            json!({"success": true, "message": "Static site deleted"})
        );
    }
}
