//! Upstream client for the purchase requisition OData resource.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rupstream::{HttpRequisitionTransport, RequisitionClient, UpstreamConfig};
//!
//! let config = Arc::new(UpstreamConfig::new("sandbox-key").expect("key is present"));
//! let transport = HttpRequisitionTransport::new(config).expect("client should build");
//! let _client = RequisitionClient::new(Arc::new(transport));
//! ```

use rcommon::BoxFuture;

mod client;
mod config;
mod credentials;
mod error;
mod hooks;
mod query;
mod records;
mod transport;

pub mod prelude {
    pub use crate::{
        HttpRequisitionTransport, RequisitionClient, RequisitionQuery, RequisitionTransport,
        UpstreamConfig, UpstreamError, UpstreamErrorKind,
    };
}

pub type UpstreamFuture<'a, T> = BoxFuture<'a, T>;

pub use client::RequisitionClient;
pub use config::{
    API_KEY_HEADER, DEFAULT_TIMEOUT, PURCHASE_REQUISITION_PATH, RESPONSE_LANGUAGE,
    SAP_SANDBOX_BASE_URL, UpstreamConfig,
};
pub use credentials::SecretString;
pub use error::{UpstreamError, UpstreamErrorKind};
pub use hooks::{NoopUpstreamHooks, UpstreamHooks};
pub use query::{DEFAULT_TOP, RequisitionQuery};
pub use records::extract_records;
pub use transport::{HttpRequisitionTransport, RequisitionTransport};
