//! Tool trait contract for registry-managed capabilities.
//!
//! Tools receive arguments that have already been validated against their descriptor's schema.

use rcommon::BoxFuture;
use serde_json::{Map, Value};

use crate::{InvocationContext, ToolDescriptor, ToolError};

pub type ToolFuture<'a, T> = BoxFuture<'a, T>;

pub trait Tool: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    fn invoke<'a>(
        &'a self,
        args: Map<String, Value>,
        context: &'a InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>>;
}
