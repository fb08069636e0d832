//! Gateway hooks for invocation lifecycle events.
//!
//! ```rust
//! use rtooling::{NoopToolGatewayHooks, ToolGatewayHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ToolGatewayHooks) {}
//!
//! let hooks = NoopToolGatewayHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use serde_json::Value;

use crate::{InvocationContext, InvocationRequest, ToolError};

pub trait ToolGatewayHooks: Send + Sync {
    fn on_invocation_start(&self, _request: &InvocationRequest, _context: &InvocationContext) {}

    fn on_invocation_success(
        &self,
        _request: &InvocationRequest,
        _context: &InvocationContext,
        _payload: &Value,
        _elapsed: Duration,
    ) {
    }

    fn on_invocation_failure(
        &self,
        _request: &InvocationRequest,
        _context: &InvocationContext,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopToolGatewayHooks;

impl ToolGatewayHooks for NoopToolGatewayHooks {}
