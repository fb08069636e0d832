//! Observability hooks for tool invocations and upstream requests.
//!
//! ```rust
//! use robserve::{MetricsObservabilityHooks, SafeToolGatewayHooks, TracingObservabilityHooks};
//!
//! let _gateway_hooks = SafeToolGatewayHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod combined;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use combined::ObservabilityHooks;
pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeToolGatewayHooks, SafeUpstreamHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, ObservabilityHooks, SafeToolGatewayHooks, SafeUpstreamHooks,
        TracingObservabilityHooks,
    };
}
