//! Common imports for embedding the adapter.

pub use crate::{
    AppConfig, AppState, ConfigError, LIST_PURCHASE_REQUISITIONS, PurchaseRequisitionTool,
    build_app, build_gateway, build_gateway_with, init_tracing, shutdown_signal,
};
pub use rtooling::prelude::*;
pub use rupstream::prelude::*;
