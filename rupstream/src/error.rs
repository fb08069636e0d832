//! Upstream error kinds and error value helpers.
//!
//! ```rust
//! use rupstream::{UpstreamError, UpstreamErrorKind};
//!
//! let failed = UpstreamError::http(429, "rate limited");
//! assert_eq!(failed.kind, UpstreamErrorKind::Http);
//! assert_eq!(failed.status, Some(429));
//!
//! let timeout = UpstreamError::timeout("operation timed out");
//! assert!(timeout.status.is_none());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    Configuration,
    Http,
    Timeout,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Configuration, message)
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(UpstreamErrorKind::Http, message)
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Transport, message)
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} ({status}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for UpstreamError {}
