//! Invocation gateway trait and default registry-backed implementation.
//!
//! Each invocation moves through resolve, decode, validate and dispatch. Resolution wins over
//! every other failure, and no failure lets the tool run.

use std::future::{Future, ready};
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::registry::unknown_tool;
use crate::{
    InvocationContext, InvocationRequest, InvocationResult, NoopToolGatewayHooks, ToolDescriptor,
    ToolError, ToolFuture, ToolGatewayHooks, ToolRegistry, parse_argument_bytes,
};

pub trait ToolGateway: Send + Sync {
    fn discover(&self) -> Vec<ToolDescriptor>;

    fn execute<'a>(
        &'a self,
        request: InvocationRequest,
        context: InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>>;

    /// Executes a call from a raw request body, or from the error raised while reading it.
    ///
    /// An unknown tool name is reported ahead of any body failure.
    fn execute_body<'a>(
        &'a self,
        tool_name: String,
        body: Result<Vec<u8>, ToolError>,
        context: InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>>;
}

#[derive(Clone)]
pub struct DefaultToolGateway {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolGatewayHooks>,
}

impl DefaultToolGateway {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolGatewayHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolGatewayHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub async fn invoke(
        &self,
        request: InvocationRequest,
        context: InvocationContext,
    ) -> InvocationResult {
        self.execute(request, context).await.into()
    }

    async fn observed<F>(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
        dispatch: F,
    ) -> Result<Value, ToolError>
    where
        F: Future<Output = Result<Value, ToolError>>,
    {
        self.hooks.on_invocation_start(request, context);
        let started = Instant::now();

        let outcome = dispatch.await;
        match &outcome {
            Ok(payload) => {
                self.hooks
                    .on_invocation_success(request, context, payload, started.elapsed())
            }
            Err(error) => {
                self.hooks
                    .on_invocation_failure(request, context, error, started.elapsed())
            }
        }

        outcome
    }

    async fn dispatch(
        &self,
        request: &InvocationRequest,
        context: &InvocationContext,
    ) -> Result<Value, ToolError> {
        let tool = self
            .registry
            .get(&request.tool_name)
            .ok_or_else(|| unknown_tool(&request.tool_name))?;

        let descriptor = tool.descriptor();
        let args = descriptor
            .input_schema
            .validate(&request.arguments)
            .map_err(|error| error.with_tool_name(&descriptor.name))?;

        tool.invoke(args, context)
            .await
            .map_err(|error| error.with_tool_name(&descriptor.name))
    }

    fn rejected_body(&self, tool_name: &str, error: ToolError) -> ToolError {
        match self.registry.descriptor(tool_name) {
            Ok(descriptor) => error.with_tool_name(descriptor.name),
            Err(not_found) => not_found,
        }
    }
}

impl ToolGateway for DefaultToolGateway {
    fn discover(&self) -> Vec<ToolDescriptor> {
        self.registry.list()
    }

    fn execute<'a>(
        &'a self,
        request: InvocationRequest,
        context: InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>> {
        Box::pin(async move {
            self.observed(&request, &context, self.dispatch(&request, &context))
                .await
        })
    }

    fn execute_body<'a>(
        &'a self,
        tool_name: String,
        body: Result<Vec<u8>, ToolError>,
        context: InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>> {
        Box::pin(async move {
            match body.and_then(|bytes| parse_argument_bytes(&bytes)) {
                Ok(arguments) => {
                    self.execute(InvocationRequest::new(tool_name, arguments), context)
                        .await
                }
                Err(error) => {
                    let request = InvocationRequest::without_arguments(tool_name);
                    let error = self.rejected_body(&request.tool_name, error);
                    self.observed(&request, &context, ready(Err(error))).await
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::{Map, json};

    use super::*;
    use crate::{InputSchema, ParamSpec, Tool, ToolErrorKind};

    struct CountingTool {
        calls: Arc<AtomicUsize>,
    }

    impl Tool for CountingTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new(
                "count",
                "Counts invocations",
                InputSchema::new().param(
                    ParamSpec::integer("step")
                        .with_default(json!(1))
                        .with_minimum(1),
                ),
            )
        }

        fn invoke<'a>(
            &'a self,
            args: Map<String, Value>,
            context: &'a InvocationContext,
        ) -> ToolFuture<'a, Result<Value, ToolError>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Ok(json!({
                    "request": context.request_id.as_str(),
                    "step": args["step"],
                }))
            })
        }
    }

    struct BrokenTool;

    impl Tool for BrokenTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new("broken", "Always fails", InputSchema::new())
        }

        fn invoke<'a>(
            &'a self,
            _args: Map<String, Value>,
            _context: &'a InvocationContext,
        ) -> ToolFuture<'a, Result<Value, ToolError>> {
            Box::pin(async move { Err(ToolError::upstream("upstream exploded").with_status(500)) })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ToolGatewayHooks for RecordingHooks {
        fn on_invocation_start(&self, request: &InvocationRequest, _context: &InvocationContext) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{}", request.tool_name));
        }

        fn on_invocation_success(
            &self,
            request: &InvocationRequest,
            _context: &InvocationContext,
            _payload: &Value,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{}", request.tool_name));
        }

        fn on_invocation_failure(
            &self,
            request: &InvocationRequest,
            _context: &InvocationContext,
            error: &ToolError,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{}:{}", request.tool_name, error.code()));
        }
    }

    fn gateway_with(calls: Arc<AtomicUsize>) -> DefaultToolGateway {
        let mut registry = ToolRegistry::new();
        registry
            .register(CountingTool { calls })
            .expect("count registers");
        registry.register(BrokenTool).expect("broken registers");
        DefaultToolGateway::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn gateway_validates_then_invokes_registered_tool() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = gateway_with(Arc::clone(&calls));

        let payload = gateway
            .execute(
                InvocationRequest::without_arguments("count"),
                InvocationContext::new("req-1"),
            )
            .await
            .expect("execution should succeed");

        assert_eq!(payload, json!({ "request": "req-1", "step": 1 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_tool_fails_before_any_tool_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = gateway_with(Arc::clone(&calls));

        let result = gateway
            .invoke(
                InvocationRequest::without_arguments("not_a_tool"),
                InvocationContext::new("req-2"),
            )
            .await;

        assert_eq!(result.code(), Some("tool_not_found"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_arguments_fail_before_the_tool_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = gateway_with(Arc::clone(&calls));
        let mut arguments = Map::new();
        arguments.insert("step".to_string(), json!(0));

        let error = gateway
            .execute(
                InvocationRequest::new("count", arguments),
                InvocationContext::new("req-3"),
            )
            .await
            .expect_err("step must be positive");

        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
        assert_eq!(error.tool_name.as_deref(), Some("count"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn tool_failures_propagate_with_tool_name() {
        let gateway = gateway_with(Arc::new(AtomicUsize::new(0)));

        let error = gateway
            .execute(
                InvocationRequest::without_arguments("broken"),
                InvocationContext::new("req-4"),
            )
            .await
            .expect_err("broken tool fails");

        assert_eq!(error.kind, ToolErrorKind::Upstream);
        assert_eq!(error.status, Some(500));
        assert_eq!(error.tool_name.as_deref(), Some("broken"));
    }

    #[tokio::test]
    async fn hooks_observe_success_and_failure() {
        let hooks = Arc::new(RecordingHooks::default());
        let gateway = gateway_with(Arc::new(AtomicUsize::new(0))).with_hooks(hooks.clone());

        let _ = gateway
            .execute(
                InvocationRequest::without_arguments("count"),
                InvocationContext::new("req-5"),
            )
            .await;
        let _ = gateway
            .execute(
                InvocationRequest::without_arguments("missing"),
                InvocationContext::new("req-6"),
            )
            .await;

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:count",
                "success:count",
                "start:missing",
                "failure:missing:tool_not_found",
            ]
        );
    }

    #[test]
    fn discover_lists_registry_contents() {
        let gateway = gateway_with(Arc::new(AtomicUsize::new(0)));
        let names = gateway
            .discover()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["count", "broken"]);
    }

    #[tokio::test]
    async fn raw_bodies_are_decoded_before_validation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = gateway_with(Arc::clone(&calls));

        let payload = gateway
            .execute_body(
                "count".to_string(),
                Ok(br#"{"step":3}"#.to_vec()),
                InvocationContext::new("req-7"),
            )
            .await
            .expect("body decodes");

        assert_eq!(payload, json!({ "request": "req-7", "step": 3 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_tool_wins_over_an_undecodable_body() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = gateway_with(Arc::clone(&calls));

        let missing = gateway
            .execute_body(
                "Count".to_string(),
                Ok(vec![b'{', 0xff, b'}']),
                InvocationContext::new("req-8"),
            )
            .await
            .expect_err("lookup is case-sensitive");
        assert_eq!(missing.kind, ToolErrorKind::NotFound);

        let unreadable = gateway
            .execute_body(
                "count".to_string(),
                Err(ToolError::invalid_arguments("length limit exceeded")),
                InvocationContext::new("req-9"),
            )
            .await
            .expect_err("unreadable body fails");
        assert_eq!(unreadable.kind, ToolErrorKind::InvalidArguments);
        assert_eq!(unreadable.tool_name.as_deref(), Some("count"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn hooks_observe_body_failures() {
        let hooks = Arc::new(RecordingHooks::default());
        let gateway = gateway_with(Arc::new(AtomicUsize::new(0))).with_hooks(hooks.clone());

        let _ = gateway
            .execute_body(
                "count".to_string(),
                Ok(b"[1,2]".to_vec()),
                InvocationContext::new("req-10"),
            )
            .await;
        let _ = gateway
            .execute_body(
                "missing".to_string(),
                Ok(vec![0xff]),
                InvocationContext::new("req-11"),
            )
            .await;

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:count",
                "failure:count:invalid_arguments",
                "start:missing",
                "failure:missing:tool_not_found",
            ]
        );
    }
}
