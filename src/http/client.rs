//! reqwest-backed transport.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;

use super::{AUTHORIZATION, RawResponse, RequestSpec, Transport, TransportError};

const USER_AGENT: &str = concat!("gophish-client/", env!("GOPHISH_VERSION"));

/// Sends requests with a shared reqwest [`Client`].
///
/// Does not call `error_for_status`: callers see every status code the
/// server returns.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an existing reqwest client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with our user agent and an optional overall timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    async fn send(&self, url: &str, request: &RequestSpec) -> Result<RawResponse, TransportError> {
        debug!("{} {}...", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);

        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::new(0, format!("Invalid header name {name}: {e}")))?;
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::new(0, format!("Invalid value for header {name}: {e}")))?;
            if name == AUTHORIZATION {
                header_value.set_sensitive(true);
            }
            builder = builder.header(header_name, header_value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());

        Ok(RawResponse { status, body })
    }
}
