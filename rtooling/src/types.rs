//! Tool descriptors, invocation requests, contexts and result envelopes.

use rcommon::{MetadataMap, RequestId, TraceId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{InputSchema, ToolError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub tool_name: String,
    pub arguments: Map<String, Value>,
}

impl InvocationRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    pub fn without_arguments(tool_name: impl Into<String>) -> Self {
        Self::new(tool_name, Map::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
    pub metadata: MetadataMap,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<RequestId>) -> Self {
        Self {
            request_id: request_id.into(),
            trace_id: None,
            metadata: MetadataMap::new(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Outcome of one invocation.
///
/// Serializes as the bare payload on success, or as `{code, message, detail?}` on failure.
///
/// ```rust
/// use rtooling::{InvocationResult, ToolError};
/// use serde_json::json;
///
/// let ok = InvocationResult::from(Ok::<_, ToolError>(json!([1, 2])));
/// assert_eq!(serde_json::to_value(&ok).unwrap(), json!([1, 2]));
///
/// let failed = InvocationResult::from(Err::<serde_json::Value, _>(ToolError::not_found("gone")));
/// assert_eq!(
///     serde_json::to_value(&failed).unwrap(),
///     json!({ "code": "tool_not_found", "message": "gone" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Success {
        payload: Value,
    },
    Failure {
        code: String,
        message: String,
        detail: Option<Value>,
    },
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { code, .. } => Some(code.as_str()),
        }
    }
}

impl From<ToolError> for InvocationResult {
    fn from(error: ToolError) -> Self {
        Self::Failure {
            code: error.code().to_string(),
            message: error.message,
            detail: error.detail,
        }
    }
}

impl From<Result<Value, ToolError>> for InvocationResult {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(payload) => Self::Success { payload },
            Err(error) => error.into(),
        }
    }
}

impl Serialize for InvocationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success { payload } => payload.serialize(serializer),
            Self::Failure {
                code,
                message,
                detail,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("code", code)?;
                map.serialize_entry("message", message)?;
                if let Some(detail) = detail {
                    map.serialize_entry("detail", detail)?;
                }
                map.end()
            }
        }
    }
}
