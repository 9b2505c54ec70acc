//! Helpers for declaring tools and handling their arguments.

use rmcp::model::Tool;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ToolError;

/// Convert a `json!` object into the shared schema map a [`Tool`] holds.
///
/// Non-object values produce an empty schema.
pub fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Build a tool descriptor.
pub fn make_tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    Tool::new(name, description, json_schema(schema))
}

/// Decode raw call arguments into a tool's typed argument struct.
///
/// `null` (no arguments at all) is read as an empty object.
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(ToolError::InvalidArguments)
}

/// Render a JSON value with 2-space indentation.
pub fn pretty_json(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(ToolError::Render)
}

/// `Some(s)` unless the string is empty.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// `Some(v)` unless the list is empty.
pub fn non_empty_list(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty())
}
