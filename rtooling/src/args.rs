//! JSON argument parsing helpers for raw request bodies and validated tool arguments.
//!
//! ```rust
//! use rtooling::{optional_string, parse_arguments, required_integer};
//!
//! let args = parse_arguments(r#"{"top":3,"select":""}"#).expect("object should parse");
//! assert_eq!(required_integer(&args, "top").expect("top should be present"), 3);
//! assert_eq!(optional_string(&args, "select"), None);
//!
//! assert!(parse_arguments("   ").expect("blank body is allowed").is_empty());
//! ```

use serde_json::{Map, Value};

use crate::ToolError;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    match parse_json_value(args_json)? {
        Value::Object(map) => Ok(map),
        _ => Err(ToolError::invalid_arguments("expected JSON object arguments")),
    }
}

/// Parses an invocation body. A blank body means no arguments.
pub fn parse_arguments(body: &str) -> Result<Map<String, Value>, ToolError> {
    if body.trim().is_empty() {
        return Ok(Map::new());
    }

    parse_json_object(body)
}

/// Parses a raw invocation body, which must be UTF-8.
pub fn parse_argument_bytes(body: &[u8]) -> Result<Map<String, Value>, ToolError> {
    let body = std::str::from_utf8(body).map_err(|err| {
        ToolError::invalid_arguments(format!("request body is not valid UTF-8: {err}"))
    })?;

    parse_arguments(body)
}

pub fn required_integer(args: &Map<String, Value>, key: &str) -> Result<i64, ToolError> {
    args.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required integer: '{key}'")))
}

/// Returns the string argument when present and non-empty.
pub fn optional_string(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
