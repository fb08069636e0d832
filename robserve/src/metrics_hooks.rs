//! Metrics-based observability hooks for tool invocations and upstream requests.
//!
//! ```rust
//! use robserve::MetricsObservabilityHooks;
//! use rtooling::ToolGatewayHooks;
//!
//! fn accepts_gateway_hooks(_hooks: &dyn ToolGatewayHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_gateway_hooks(&hooks);
//! ```
//!
//! The `tool_name` label only ever carries a registered name. Unknown names are folded into
//! `unknown`, and the start counter is unlabelled because it fires before resolution.

use std::time::Duration;

use rtooling::{InvocationContext, InvocationRequest, ToolError, ToolErrorKind, ToolGatewayHooks};
use rupstream::{RequisitionQuery, UpstreamError, UpstreamHooks};
use serde_json::Value;

const UNKNOWN_TOOL: &str = "unknown";

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

pub(crate) fn tool_label(request: &InvocationRequest, error: Option<&ToolError>) -> String {
    match error {
        Some(error) if error.kind == ToolErrorKind::NotFound => UNKNOWN_TOOL.to_string(),
        _ => request.tool_name.clone(),
    }
}

impl ToolGatewayHooks for MetricsObservabilityHooks {
    fn on_invocation_start(&self, _request: &InvocationRequest, _context: &InvocationContext) {
        metrics::counter!("reqbridge_tool_invocation_start_total").increment(1);
    }

    fn on_invocation_success(
        &self,
        request: &InvocationRequest,
        _context: &InvocationContext,
        _payload: &Value,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "reqbridge_tool_invocation_success_total",
            "tool_name" => tool_label(request, None)
        )
        .increment(1);
        metrics::histogram!(
            "reqbridge_tool_invocation_duration_seconds",
            "tool_name" => tool_label(request, None),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_invocation_failure(
        &self,
        request: &InvocationRequest,
        _context: &InvocationContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let tool_name = tool_label(request, Some(error));
        metrics::counter!(
            "reqbridge_tool_invocation_failure_total",
            "tool_name" => tool_name.clone(),
            "error_code" => error.code()
        )
        .increment(1);
        metrics::histogram!(
            "reqbridge_tool_invocation_duration_seconds",
            "tool_name" => tool_name,
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl UpstreamHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, _query: &RequisitionQuery) {
        metrics::counter!("reqbridge_upstream_request_start_total").increment(1);
    }

    fn on_request_success(&self, _query: &RequisitionQuery, elapsed: Duration) {
        metrics::counter!("reqbridge_upstream_request_success_total").increment(1);
        metrics::histogram!(
            "reqbridge_upstream_request_duration_seconds",
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_request_failure(
        &self,
        _query: &RequisitionQuery,
        error: &UpstreamError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "reqbridge_upstream_request_failure_total",
            "error_kind" => format!("{:?}", error.kind),
            "status" => error.status.map(|status| status.to_string()).unwrap_or_default()
        )
        .increment(1);
        metrics::histogram!(
            "reqbridge_upstream_request_duration_seconds",
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
