//! Extraction of the record collection from an OData response body.
//!
//! ```rust
//! use rupstream::extract_records;
//! use serde_json::json;
//!
//! assert_eq!(extract_records(r#"{"value":[{"Plant":"1000"}]}"#), json!([{"Plant": "1000"}]));
//! assert_eq!(extract_records("<html>busy</html>"), json!("<html>busy</html>"));
//! ```

use serde_json::Value;

/// Returns the `value` array of an OData envelope.
///
/// Valid JSON without a `value` array passes through whole. Bodies that are not JSON come back
/// as a JSON string holding the raw text.
pub fn extract_records(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut envelope)) => match envelope.remove("value") {
            Some(records @ Value::Array(_)) => records,
            Some(other) => {
                envelope.insert("value".to_string(), other);
                Value::Object(envelope)
            }
            None => Value::Object(envelope),
        },
        Ok(other) => other,
        Err(_) => Value::String(body.to_string()),
    }
}
