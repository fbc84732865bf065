use serde::de::DeserializeOwned;
use std::borrow::Cow;
use thiserror::Error;

use crate::http::{RawResponse, TransportError};

/// Why a call was refused before anything was sent.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Gophish host or API key not set. Check the client configuration.")]
    MissingConfiguration,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidBody(err.to_string())
    }
}

/// Payload of an [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Bytes exactly as the server sent them.
    Raw(Vec<u8>),
    /// The exchange failed; carries the transport's error message.
    TransportError(String),
}

/// Uniform result of every API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: ResponseBody::Raw(body.into()),
        }
    }

    /// Folds a transport outcome into a response. Never fails.
    pub fn from_transport(result: Result<RawResponse, TransportError>) -> Self {
        match result {
            Ok(raw) => Self::new(raw.status, raw.body),
            Err(err) => Self {
                status: err.code,
                body: ResponseBody::TransportError(err.message),
            },
        }
    }

    /// True for a 2xx reply from the server.
    pub fn is_success(&self) -> bool {
        matches!(self.body, ResponseBody::Raw(_)) && (200..300).contains(&self.status)
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self.body, ResponseBody::TransportError(_))
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.body {
            ResponseBody::Raw(bytes) => bytes,
            ResponseBody::TransportError(message) => message.as_bytes(),
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Deserializes a raw body. Transport errors are not JSON and always fail.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        match &self.body {
            ResponseBody::Raw(bytes) => serde_json::from_slice(bytes),
            ResponseBody::TransportError(message) => {
                Err(serde::de::Error::custom(format!("no response body: {message}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_from_transport_reply() {
        let response = ApiResponse::from_transport(Ok(RawResponse::new(404, "not found")));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, ResponseBody::Raw(b"not found".to_vec()));
        assert!(!response.is_success());
        assert!(!response.is_transport_error());
    }

    #[test]
    fn test_from_transport_error() {
        let response = ApiResponse::from_transport(Err(TransportError::new(500, "boom")));
        assert_eq!(response.status, 500);
        assert_eq!(response.body, ResponseBody::TransportError("boom".to_string()));
        assert_eq!(response.text(), "boom");
        assert!(!response.is_success());
        assert!(response.is_transport_error());
    }

    #[test]
    fn test_json_on_raw_body() {
        let response = ApiResponse::new(200, r#"{"id":5,"name":"t"}"#);
        assert!(response.is_success());
        assert_eq!(response.json::<Value>().unwrap(), json!({"id": 5, "name": "t"}));
    }

    #[test]
    fn test_json_on_transport_error_fails() {
        let response = ApiResponse::from_transport(Err(TransportError::new(0, "refused")));
        let err = response.json::<Value>().unwrap_err();
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_client_error_display() {
        assert!(
            ClientError::MissingConfiguration
                .to_string()
                .contains("host or API key")
        );
        assert!(
            ClientError::InvalidBody("nope".into())
                .to_string()
                .contains("nope")
        );
    }
}
