//! Process configuration loaded from environment variables.
//!
//! ```rust
//! use reqbridge::AppConfig;
//!
//! let config = AppConfig::from_vars([
//!     ("SAP_API_KEY".to_string(), "sandbox-key".to_string()),
//!     ("PORT".to_string(), "9000".to_string()),
//! ])
//! .expect("api key is present");
//!
//! assert_eq!(config.bind_address(), "0.0.0.0:9000");
//! assert_eq!(config.default_top, 5);
//! ```

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use rupstream::{
    DEFAULT_TOP, PURCHASE_REQUISITION_PATH, SAP_SANDBOX_BASE_URL, UpstreamConfig, UpstreamError,
};
use serde::Deserialize;

/// Largest `top` the sandbox accepts.
pub const MAX_TOP: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Environment,
    MissingApiKey,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            ConfigErrorKind::MissingApiKey,
            "the SAP API key is not configured; set SAP_API_KEY before starting the server",
        )
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid, message)
    }

    /// Wire code shared with tool errors.
    pub fn code(&self) -> &'static str {
        "configuration_error"
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl Error for ConfigError {}

impl From<envy::Error> for ConfigError {
    fn from(err: envy::Error) -> Self {
        Self::new(ConfigErrorKind::Environment, err.to_string())
    }
}

impl From<UpstreamError> for ConfigError {
    fn from(err: UpstreamError) -> Self {
        Self::invalid(err.message)
    }
}

#[derive(Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub sap_api_key: String,

    #[serde(default = "default_base_url")]
    pub sap_base_url: String,

    #[serde(default = "default_resource_path")]
    pub sap_resource_path: String,

    #[serde(default = "default_timeout_secs")]
    pub sap_timeout_secs: u64,

    /// Page size used when a caller omits `top`.
    #[serde(default = "default_top")]
    pub default_top: u32,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `json` or `pretty`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    SAP_SANDBOX_BASE_URL.to_string()
}

fn default_resource_path() -> String {
    PURCHASE_REQUISITION_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_top() -> u32 {
    DEFAULT_TOP
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl AppConfig {
    /// Loads and validates configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        envy::from_env::<Self>()?.validated()
    }

    /// Loads and validates configuration from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.sap_api_key.trim().is_empty() {
            return Err(ConfigError::missing_api_key());
        }

        if self.default_top == 0 || self.default_top > MAX_TOP {
            return Err(ConfigError::invalid(format!(
                "DEFAULT_TOP must be between 1 and {MAX_TOP}, got {}",
                self.default_top
            )));
        }

        if self.sap_timeout_secs == 0 {
            return Err(ConfigError::invalid("SAP_TIMEOUT_SECS must be positive"));
        }

        if !matches!(self.log_format.as_str(), "json" | "pretty") {
            return Err(ConfigError::invalid(format!(
                "LOG_FORMAT must be 'json' or 'pretty', got '{}'",
                self.log_format
            )));
        }

        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.sap_timeout_secs)
    }

    pub fn upstream_config(&self) -> Result<Arc<UpstreamConfig>, ConfigError> {
        let config = UpstreamConfig::new(self.sap_api_key.clone())?
            .with_base_url(&self.sap_base_url)
            .with_resource_path(&self.sap_resource_path)
            .with_timeout(self.timeout());

        Ok(Arc::new(config))
    }
}

impl Debug for AppConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("sap_api_key", &"[REDACTED]")
            .field("sap_base_url", &self.sap_base_url)
            .field("sap_resource_path", &self.sap_resource_path)
            .field("sap_timeout_secs", &self.sap_timeout_secs)
            .field("default_top", &self.default_top)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}
