//! Upstream endpoint and credential configuration.
//!
//! Built once at startup and shared read-only by every request.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use rupstream::UpstreamConfig;
//!
//! let config = UpstreamConfig::new("sandbox-key")
//!     .expect("key is present")
//!     .with_base_url("http://localhost:9000/")
//!     .with_resource_path("/odata/PurchaseReqn")
//!     .with_timeout(Duration::from_secs(5));
//!
//! assert_eq!(config.endpoint(), "http://localhost:9000/odata/PurchaseReqn");
//! assert_eq!(config.timeout(), Duration::from_secs(5));
//! ```

use std::time::Duration;

use crate::{SecretString, UpstreamError};

pub const SAP_SANDBOX_BASE_URL: &str = "https://sandbox.api.sap.com/s4hanacloud";
pub const PURCHASE_REQUISITION_PATH: &str = "sap/opu/odata4/sap/api_purchaserequisition_2/srvd_a2x/sap/purchaserequisition/0001/PurchaseReqn";
/// Header carrying the sandbox API key.
pub const API_KEY_HEADER: &str = "APIKey";
pub const RESPONSE_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct UpstreamConfig {
    base_url: String,
    resource_path: String,
    api_key: SecretString,
    timeout: Duration,
}

impl UpstreamConfig {
    /// Creates a configuration for the SAP sandbox. Fails when `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, UpstreamError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(UpstreamError::configuration("api key must not be empty"));
        }

        Ok(Self {
            base_url: SAP_SANDBOX_BASE_URL.to_string(),
            resource_path: PURCHASE_REQUISITION_PATH.to_string(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_resource_path(mut self, resource_path: impl Into<String>) -> Self {
        self.resource_path = resource_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource_path.trim_start_matches('/')
        )
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
