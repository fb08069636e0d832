//! Tracing-based observability hooks for tool invocations and upstream requests.
//!
//! ```rust
//! use robserve::TracingObservabilityHooks;
//! use rupstream::UpstreamHooks;
//!
//! fn accepts_upstream_hooks(_hooks: &dyn UpstreamHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_upstream_hooks(&hooks);
//! ```

use std::time::Duration;

use rtooling::{InvocationContext, InvocationRequest, ToolError, ToolGatewayHooks};
use rupstream::{RequisitionQuery, UpstreamError, UpstreamHooks};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ToolGatewayHooks for TracingObservabilityHooks {
    fn on_invocation_start(&self, request: &InvocationRequest, context: &InvocationContext) {
        tracing::info!(
            phase = "tool",
            event = "invocation_start",
            tool_name = %request.tool_name,
            request_id = %context.request_id,
            trace_id = ?context.trace_id.as_ref().map(|id| id.as_str()),
            metadata = ?context.metadata,
            argument_count = request.arguments.len()
        );
    }

    fn on_invocation_success(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        payload: &Value,
        elapsed: Duration,
    ) {
        let record_count = payload.as_array().map(Vec::len);
        tracing::info!(
            phase = "tool",
            event = "invocation_success",
            tool_name = %request.tool_name,
            request_id = %context.request_id,
            trace_id = ?context.trace_id.as_ref().map(|id| id.as_str()),
            record_count = ?record_count,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_invocation_failure(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        if error.is_user_error() {
            tracing::warn!(
                phase = "tool",
                event = "invocation_failure",
                tool_name = %request.tool_name,
                request_id = %context.request_id,
                trace_id = ?context.trace_id.as_ref().map(|id| id.as_str()),
                error_code = error.code(),
                elapsed_ms = elapsed.as_millis() as u64,
                error = %error
            );
        } else {
            tracing::error!(
                phase = "tool",
                event = "invocation_failure",
                tool_name = %request.tool_name,
                request_id = %context.request_id,
                trace_id = ?context.trace_id.as_ref().map(|id| id.as_str()),
                error_code = error.code(),
                upstream_status = ?error.status,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %error
            );
        }
    }
}

impl UpstreamHooks for TracingObservabilityHooks {
    fn on_request_start(&self, query: &RequisitionQuery) {
        tracing::info!(
            phase = "upstream",
            event = "request_start",
            query = %query.to_query_string()
        );
    }

    fn on_request_success(&self, query: &RequisitionQuery, elapsed: Duration) {
        tracing::info!(
            phase = "upstream",
            event = "request_success",
            query = %query.to_query_string(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_request_failure(
        &self,
        query: &RequisitionQuery,
        error: &UpstreamError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "upstream",
            event = "request_failure",
            query = %query.to_query_string(),
            error_kind = ?error.kind,
            status = ?error.status,
            elapsed_ms = elapsed.as_millis() as u64,
            error = %error
        );
    }
}
