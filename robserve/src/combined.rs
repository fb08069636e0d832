//! Tracing and metrics hooks behind a single hook slot.

use std::time::Duration;

use rtooling::{InvocationContext, InvocationRequest, ToolError, ToolGatewayHooks};
use rupstream::{RequisitionQuery, UpstreamError, UpstreamHooks};
use serde_json::Value;

use crate::{MetricsObservabilityHooks, TracingObservabilityHooks};

/// Forwards every event to [`TracingObservabilityHooks`] and then [`MetricsObservabilityHooks`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservabilityHooks {
    tracing: TracingObservabilityHooks,
    metrics: MetricsObservabilityHooks,
}

impl ToolGatewayHooks for ObservabilityHooks {
    fn on_invocation_start(&self, request: &InvocationRequest, context: &InvocationContext) {
        self.tracing.on_invocation_start(request, context);
        self.metrics.on_invocation_start(request, context);
    }

    fn on_invocation_success(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        payload: &Value,
        elapsed: Duration,
    ) {
        self.tracing
            .on_invocation_success(request, context, payload, elapsed);
        self.metrics
            .on_invocation_success(request, context, payload, elapsed);
    }

    fn on_invocation_failure(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        self.tracing
            .on_invocation_failure(request, context, error, elapsed);
        self.metrics
            .on_invocation_failure(request, context, error, elapsed);
    }
}

impl UpstreamHooks for ObservabilityHooks {
    fn on_request_start(&self, query: &RequisitionQuery) {
        self.tracing.on_request_start(query);
        self.metrics.on_request_start(query);
    }

    fn on_request_success(&self, query: &RequisitionQuery, elapsed: Duration) {
        self.tracing.on_request_success(query, elapsed);
        self.metrics.on_request_success(query, elapsed);
    }

    fn on_request_failure(
        &self,
        query: &RequisitionQuery,
        error: &UpstreamError,
        elapsed: Duration,
    ) {
        self.tracing.on_request_failure(query, error, elapsed);
        self.metrics.on_request_failure(query, error, elapsed);
    }
}
