//! HTTP surface for tool discovery and invocation.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | `{"status":"ok","mcp":"available"}` |
//! | `GET /mcp/tools` | `{"tools":[{name, description, input_schema, endpoint}]}` |
//! | `POST /mcp/tools/{name}` | success payload, or `{code, message, detail?}` |

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::signal;
use tower_http::trace::TraceLayer;

use rtooling::{
    InvocationContext, InvocationResult, ToolDescriptor, ToolError, ToolErrorKind, ToolGateway,
};

pub const TOOLS_PATH: &str = "/mcp/tools";

/// Caller-supplied correlation id, carried as the invocation trace id.
pub const TRACE_ID_HEADER: &str = "x-request-id";

/// Invocation metadata key holding the caller's `User-Agent`.
pub const USER_AGENT_METADATA: &str = "user_agent";

#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn ToolGateway>,
    invocations: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ToolGateway>) -> Self {
        Self {
            gateway,
            invocations: Arc::new(AtomicU64::new(0)),
        }
    }

    fn next_context(&self, headers: &HeaderMap) -> InvocationContext {
        let sequence = self.invocations.fetch_add(1, Ordering::Relaxed) + 1;
        let mut context = InvocationContext::new(format!("req-{sequence}"));

        if let Some(trace_id) = header_text(headers, TRACE_ID_HEADER) {
            context = context.with_trace_id(trace_id);
        }
        if let Some(user_agent) = header_text(headers, header::USER_AGENT.as_str()) {
            context = context.with_metadata(USER_AGENT_METADATA, user_agent);
        }
        context
    }
}

fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
struct ToolListing {
    #[serde(flatten)]
    descriptor: ToolDescriptor,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct Discovery {
    tools: Vec<ToolListing>,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(TOOLS_PATH, get(list_tools))
        .route("/mcp/tools/{name}", post(invoke_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP status for a failed invocation.
///
/// Upstream failures reuse the upstream status when it is a valid error status.
pub fn status_for(error: &ToolError) -> StatusCode {
    match error.kind {
        ToolErrorKind::NotFound => StatusCode::NOT_FOUND,
        ToolErrorKind::InvalidArguments => StatusCode::BAD_REQUEST,
        ToolErrorKind::Upstream => error
            .status
            .and_then(|status| StatusCode::from_u16(status).ok())
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        ToolErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "mcp": "available" }))
}

async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    let tools = state
        .gateway
        .discover()
        .into_iter()
        .map(|descriptor| ToolListing {
            endpoint: format!("{TOOLS_PATH}/{}", descriptor.name),
            descriptor,
        })
        .collect();

    Json(Discovery { tools })
}

async fn invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let context = state.next_context(&headers);
    let body = body
        .map(Vec::from)
        .map_err(|rejection| ToolError::invalid_arguments(rejection.body_text()));

    let outcome = state.gateway.execute_body(name, body, context).await;

    match outcome {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(error) => {
            let status = status_for(&error);
            (status, Json(InvocationResult::from(error))).into_response()
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
