//! MCP-style tool adapter for the SAP purchase requisition OData API.
//!
//! This crate wires the workspace crates into one process: configuration, the
//! `list_purchase_requisitions` tool, and the axum routes that expose discovery and invocation.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use reqbridge::{AppConfig, AppState, build_app, build_gateway};
//!
//! let config = AppConfig::from_vars([("SAP_API_KEY".to_string(), "sandbox-key".to_string())])
//!     .expect("api key is present");
//! let gateway = build_gateway(&config).expect("gateway should build");
//! let _app = build_app(AppState::new(Arc::new(gateway)));
//! ```

mod config;
mod requisitions;

pub mod prelude;
pub mod runtime;
pub mod server;
pub mod telemetry;

pub use rcommon;
pub use robserve;
pub use rtooling;
pub use rupstream;

pub use config::{AppConfig, ConfigError, ConfigErrorKind, MAX_TOP};
pub use requisitions::{LIST_PURCHASE_REQUISITIONS, PurchaseRequisitionTool, upstream_failure};
pub use runtime::{build_gateway, build_gateway_with, requisition_registry};
pub use server::{
    AppState, TOOLS_PATH, TRACE_ID_HEADER, USER_AGENT_METADATA, build_app, shutdown_signal,
    status_for,
};
pub use telemetry::init_tracing;
