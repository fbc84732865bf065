//! HTTP transport abstraction.
//!
//! The client never talks to reqwest directly; it hands a [`RequestSpec`] to a
//! [`Transport`] and gets back either the server's reply or a
//! [`TransportError`]. Every HTTP status, including 4xx and 5xx, is a reply.
//! Only failures to complete the exchange (connect, DNS, TLS, timeout, body
//! read) are errors.

mod client;
mod request;

use async_trait::async_trait;
use std::error::Error as _;
use thiserror::Error;

pub use client::HttpTransport;
pub use request::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, Method, RawResponse, RequestSpec};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` to the absolute `url`.
    async fn send(&self, url: &str, request: &RequestSpec) -> Result<RawResponse, TransportError>;
}

/// A request that never produced an HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status attached to the failure, or 0 when there is none.
    pub code: u16,
    pub message: String,
}

impl TransportError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let code = error.status().map(|s| s.as_u16()).unwrap_or(0);

        // reqwest's top-level message is generic; the cause sits further down
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::new(500, "boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.code, 500);
    }
}
