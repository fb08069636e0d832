use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use rtooling::{InvocationContext, InvocationRequest, ToolError, ToolGatewayHooks};
use rupstream::{RequisitionQuery, UpstreamError, UpstreamHooks};
use serde_json::Value;

pub struct SafeToolGatewayHooks<H> {
    inner: H,
}

impl<H> SafeToolGatewayHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolGatewayHooks for SafeToolGatewayHooks<H>
where
    H: ToolGatewayHooks,
{
    fn on_invocation_start(&self, request: &InvocationRequest, context: &InvocationContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_invocation_start(request, context)
        }));
    }

    fn on_invocation_success(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        payload: &Value,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_invocation_success(request, context, payload, elapsed)
        }));
    }

    fn on_invocation_failure(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_invocation_failure(request, context, error, elapsed)
        }));
    }
}

pub struct SafeUpstreamHooks<H> {
    inner: H,
}

impl<H> SafeUpstreamHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> UpstreamHooks for SafeUpstreamHooks<H>
where
    H: UpstreamHooks,
{
    fn on_request_start(&self, query: &RequisitionQuery) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_request_start(query)));
    }

    fn on_request_success(&self, query: &RequisitionQuery, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_success(query, elapsed)
        }));
    }

    fn on_request_failure(
        &self,
        query: &RequisitionQuery,
        error: &UpstreamError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_failure(query, error, elapsed)
        }));
    }
}
