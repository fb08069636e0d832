//! Tool registry for lookup by descriptor name.
//!
//! Tools are listed in registration order. Names are unique and matched case-sensitively.
//!
//! ```rust
//! use rtooling::{
//!     InputSchema, InvocationContext, Tool, ToolDescriptor, ToolError, ToolFuture, ToolRegistry,
//! };
//! use serde_json::{Map, Value, json};
//!
//! struct Ping;
//!
//! impl Tool for Ping {
//!     fn descriptor(&self) -> ToolDescriptor {
//!         ToolDescriptor::new("ping", "Replies with pong", InputSchema::new())
//!     }
//!
//!     fn invoke<'a>(
//!         &'a self,
//!         _args: Map<String, Value>,
//!         _context: &'a InvocationContext,
//!     ) -> ToolFuture<'a, Result<Value, ToolError>> {
//!         Box::pin(async move { Ok(json!("pong")) })
//!     }
//! }
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(Ping).expect("first registration succeeds");
//!
//! assert_eq!(registry.list()[0].name, "ping");
//! assert!(registry.descriptor("Ping").is_err());
//! ```

use std::sync::Arc;

use rcommon::Registry;

use crate::{Tool, ToolDescriptor, ToolError};

#[derive(Default)]
pub struct ToolRegistry {
    tools: Registry<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T) -> Result<(), ToolError>
    where
        T: Tool + 'static,
    {
        let name = tool.descriptor().name;
        if self.tools.contains_key(&name) {
            return Err(ToolError::configuration(format!(
                "a tool named '{name}' is already registered"
            )));
        }

        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn descriptor(&self, name: &str) -> Result<ToolDescriptor, ToolError> {
        self.tools
            .get(name)
            .map(|tool| tool.descriptor())
            .ok_or_else(|| unknown_tool(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(|tool| tool.descriptor()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

pub(crate) fn unknown_tool(name: &str) -> ToolError {
    ToolError::not_found(format!("tool '{name}' is not registered")).with_tool_name(name)
}
