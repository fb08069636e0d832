//! Tool invocation errors and their wire codes.
//!
//! ```rust
//! use rtooling::{ToolError, ToolErrorKind};
//!
//! let error = ToolError::not_found("tool 'nope' is not registered").with_tool_name("nope");
//! assert_eq!(error.kind, ToolErrorKind::NotFound);
//! assert_eq!(error.code(), "tool_not_found");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    NotFound,
    InvalidArguments,
    Upstream,
    Configuration,
}

impl ToolErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "tool_not_found",
            Self::InvalidArguments => "invalid_arguments",
            Self::Upstream => "upstream_error",
            Self::Configuration => "configuration_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    pub detail: Option<Value>,
    /// Upstream HTTP status, when the failure carried one.
    pub status: Option<u16>,
    pub tool_name: Option<String>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
            status: None,
            tool_name: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArguments, message)
    }

    /// Argument error naming the offending field, carried in `detail`.
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::invalid_arguments(format!("invalid value for '{field}': {reason}"))
            .with_detail(json!({ "field": field, "reason": reason }))
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Upstream, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Configuration, message)
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ToolErrorKind::InvalidArguments | ToolErrorKind::NotFound
        )
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.tool_name {
            Some(tool_name) => write!(f, "{} [tool={}]: {}", self.code(), tool_name, self.message),
            None => write!(f, "{}: {}", self.code(), self.message),
        }
    }
}

impl Error for ToolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_wire_codes() {
        assert_eq!(ToolError::not_found("x").code(), "tool_not_found");
        assert_eq!(ToolError::invalid_arguments("x").code(), "invalid_arguments");
        assert_eq!(ToolError::upstream("x").code(), "upstream_error");
        assert_eq!(ToolError::configuration("x").code(), "configuration_error");
    }

    #[test]
    fn invalid_field_records_field_and_reason() {
        let error = ToolError::invalid_field("top", "must be >= 1");

        assert!(error.is_user_error());
        assert_eq!(
            error.detail,
            Some(json!({ "field": "top", "reason": "must be >= 1" }))
        );
        assert!(error.message.contains("'top'"));
    }

    #[test]
    fn tool_name_is_included_in_display() {
        let error = ToolError::upstream("boom")
            .with_tool_name("lookup")
            .with_status(503);

        let rendered = error.to_string();
        assert!(rendered.contains("lookup"));
        assert!(rendered.starts_with("upstream_error"));
        assert!(!error.is_user_error());
        assert_eq!(error.status, Some(503));
    }
}
