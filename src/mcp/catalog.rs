use crate::constants::tools::{MAX_SCHEMA_ERRORS, MAX_SUGGESTIONS};
use crate::errors::ToolError;
use crate::utils::suggest::suggest;
use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static TOOL_CATALOG: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tool_catalog.json"));
    serde_json::from_str(raw).expect("tool_catalog.json must be valid JSON")
});

static TOOL_MAP: Lazy<HashMap<&'static str, &'static ToolDef>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .map(|tool| (tool.name.as_str(), tool))
        .collect()
});

static TOOL_VALIDATORS: Lazy<HashMap<&'static str, JSONSchema>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .filter_map(|tool| {
            JSONSchema::compile(&tool.input_schema)
                .ok()
                .map(|schema| (tool.name.as_str(), schema))
        })
        .collect()
});

pub fn tool_catalog() -> &'static [ToolDef] {
    &TOOL_CATALOG
}

pub fn tool_by_name(name: &str) -> Option<&'static ToolDef> {
    TOOL_MAP.get(name).copied()
}

/// Catalog as advertised by `tools/list`.
pub fn list_tools() -> Vec<ToolDef> {
    TOOL_CATALOG.clone()
}

pub fn validate_tool_args(tool_name: &str, args: &Value) -> Result<(), ToolError> {
    let (Some(tool), Some(schema)) = (tool_by_name(tool_name), TOOL_VALIDATORS.get(tool_name))
    else {
        return Ok(());
    };
    if let Err(errors) = schema.validate(args) {
        let message = format_schema_errors(tool_name, args, errors, &tool.input_schema);
        return Err(ToolError::invalid_params(message));
    }
    Ok(())
}

fn format_schema_errors(
    tool_name: &str,
    args: &Value,
    errors: jsonschema::ErrorIterator,
    schema: &Value,
) -> String {
    let mut lines = vec![format!("Invalid arguments for {}", tool_name)];
    let mut did_you_means = Vec::new();

    for err in errors.take(MAX_SCHEMA_ERRORS) {
        let pointer = err.instance_path.to_string();
        let location = if pointer.is_empty() {
            "(root)".to_string()
        } else {
            pointer.clone()
        };
        let line = match &err.kind {
            ValidationErrorKind::Required { property } => {
                let name = property
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| property.to_string());
                format!("{}: missing required field '{}'", location, name)
            }
            ValidationErrorKind::Type { kind } => {
                format!("{}: expected {}", location, format_type_kind(kind))
            }
            ValidationErrorKind::Enum { options } => {
                let allowed: Vec<String> = options
                    .as_array()
                    .map(|arr| {
                        arr.iter()
                            .map(|v| v.as_str().map(|s| s.to_string()).unwrap_or_else(|| v.to_string()))
                            .collect()
                    })
                    .unwrap_or_default();
                let received = args.pointer(&pointer).and_then(|v| v.as_str()).unwrap_or("");
                let suggestions = suggest(received, &allowed, MAX_SUGGESTIONS);
                if !suggestions.is_empty() {
                    did_you_means.push(format!("{}: {}", location, suggestions.join(", ")));
                }
                format!("{}: expected one of {}", location, allowed.join(", "))
            }
            _ => format!("{}: {}", location, err),
        };
        lines.push(format!("- {}", line));
    }

    if !did_you_means.is_empty() {
        lines.push(format!("Did you mean: {}", did_you_means.join(" | ")));
    }
    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        let names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        if !names.is_empty() {
            lines.push(format!("Required: {}", names.join(", ")));
        }
    }
    lines.join("\n")
}

fn format_type_kind(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Single(primitive) => primitive.to_string(),
        TypeKind::Multiple(types) => {
            let list: Vec<String> = (*types).into_iter().map(|t| t.to_string()).collect();
            if list.is_empty() {
                "unknown".to_string()
            } else {
                list.join(" | ")
            }
        }
    }
}
