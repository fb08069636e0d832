//! Capability layer for describing, discovering and invoking tools.

mod args;
mod error;
mod hooks;
mod registry;
mod runtime;
mod schema;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolGateway, InputSchema, InvocationContext, InvocationRequest, InvocationResult,
        ParamSpec, ParamType, Tool, ToolDescriptor, ToolError, ToolErrorKind, ToolFuture,
        ToolGateway, ToolRegistry,
    };
}

pub use args::{
    optional_string, parse_argument_bytes, parse_arguments, parse_json_object, parse_json_value,
    required_integer,
};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolGatewayHooks, ToolGatewayHooks};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolGateway, ToolGateway};
pub use schema::{InputSchema, ParamSpec, ParamType};
pub use tool::{Tool, ToolFuture};
pub use types::{InvocationContext, InvocationRequest, InvocationResult, ToolDescriptor};
