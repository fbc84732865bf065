//! The Gophish API client and its request routine.
//!
//! Every resource operation in [`crate::api`] funnels through
//! [`GophishClient::request`], which
//!
//! - refuses to send anything while host or API key is missing,
//! - attaches the API key as the `Authorization` header,
//! - logs a redacted copy of the request and the reply when logging is on,
//! - turns transport failures into an [`ApiResponse`] instead of an error.

mod report;
mod response;

use crate::{
    config::{ClientConfig, ConfigSource},
    http::{AUTHORIZATION, RequestSpec, Transport},
    logging::LogSink,
};

pub use report::REDACTED_API_KEY;
pub use response::{ApiResponse, ClientError, ResponseBody};

pub type ApiResult = Result<ApiResponse, ClientError>;

pub struct GophishClient<T: Transport, L: LogSink> {
    config: ClientConfig,
    transport: T,
    sink: L,
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    /// Reads host, API key and logging flag from `config` once.
    pub fn new<C: ConfigSource + ?Sized>(config: &C, transport: T, sink: L) -> Self {
        Self::with_config(ClientConfig::load(config), transport, sink)
    }

    pub fn with_config(config: ClientConfig, transport: T, sink: L) -> Self {
        Self {
            config,
            transport,
            sink,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `request` to the configured host and returns whatever came back.
    ///
    /// Returns `Err` only when the client is not configured. HTTP error
    /// statuses and transport failures are both `Ok` responses; check
    /// [`ApiResponse::status`] and [`ApiResponse::body`].
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn request(&self, request: RequestSpec) -> ApiResult {
        let Some((host, api_key)) = self.config.credentials() else {
            if self.config.logging_enabled {
                self.sink.error(report::MISSING_CONFIGURATION);
            }
            return Err(ClientError::MissingConfiguration);
        };

        let request = request.header(AUTHORIZATION, api_key);

        if self.config.logging_enabled {
            let redacted = request.redacted(api_key, REDACTED_API_KEY);
            self.sink.info(&report::sending_request(&redacted));
        }

        let url = format!("{}{}", host, request.path);
        let result = self.transport.send(&url, &request).await;

        if self.config.logging_enabled {
            match &result {
                Ok(raw) => self.sink.info(&report::request_response(&request, raw)),
                Err(err) => self.sink.info(&report::request_error(&request, err)),
            }
        }

        Ok(ApiResponse::from_transport(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{API_KEY_KEY, HOST_KEY, LOGGING_KEY, StaticConfig};
    use crate::http::{Method, MockTransport, RawResponse, TransportError};
    use crate::logging::MockLogSink;
    use crate::test_utils::RecordingSink;

    fn config(logging: bool) -> StaticConfig {
        StaticConfig::new()
            .with(HOST_KEY, "http://h")
            .with(API_KEY_KEY, "k")
            .with(LOGGING_KEY, if logging { "true" } else { "false" })
    }

    #[tokio::test]
    async fn test_request_attaches_authorization_and_joins_url() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|url, request| {
                url == "http://h/api/templates/5"
                    && request.method == Method::Get
                    && request.header_value(AUTHORIZATION) == Some("k")
            })
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(200, r#"{"id":5,"name":"t"}"#)));

        // Logging off: the sink must never be touched
        let sink = MockLogSink::new();
        let client = GophishClient::new(&config(false), transport, sink);

        let response = client
            .request(RequestSpec::new(Method::Get, "/api/templates/5"))
            .await
            .unwrap();

        assert_eq!(response, ApiResponse::new(200, r#"{"id":5,"name":"t"}"#));
    }

    #[tokio::test]
    async fn test_missing_host_sends_nothing() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);

        let mut sink = MockLogSink::new();
        sink.expect_error()
            .withf(|m| m.contains("host or API key not set"))
            .times(1)
            .return_const(());
        sink.expect_info().times(0);

        let source = StaticConfig::new()
            .with(API_KEY_KEY, "k")
            .with(LOGGING_KEY, "1");
        let client = GophishClient::new(&source, transport, sink);

        let result = client.request(RequestSpec::new(Method::Get, "/api/users/")).await;

        assert!(matches!(result, Err(ClientError::MissingConfiguration)));
    }

    #[tokio::test]
    async fn test_missing_key_without_logging_is_silent() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);
        let sink = MockLogSink::new();

        let source = StaticConfig::new().with(HOST_KEY, "http://h").with(API_KEY_KEY, "");
        let client = GophishClient::new(&source, transport, sink);

        let result = client.request(RequestSpec::new(Method::Delete, "/api/users/1")).await;

        assert!(matches!(result, Err(ClientError::MissingConfiguration)));
    }

    #[tokio::test]
    async fn test_logged_request_is_redacted() {
        let requests = [
            (
                RequestSpec::new(Method::Post, "/api/templates/")
                    .json(&serde_json::json!({"name": "t"}))
                    .unwrap(),
                "(POST) /api/templates/",
            ),
            (
                RequestSpec::new(Method::Put, "/api/groups/4")
                    .json(&serde_json::json!({"id": 4, "name": "g"}))
                    .unwrap(),
                "(PUT) /api/groups/4",
            ),
            (
                RequestSpec::new(Method::Delete, "/api/users/2"),
                "(DELETE) /api/users/2",
            ),
        ];

        for (request, endpoint) in requests {
            let mut transport = MockTransport::new();
            transport
                .expect_send()
                .withf(|_, request| request.header_value(AUTHORIZATION) == Some("super-secret"))
                .times(1)
                .returning(|_, _| Ok(RawResponse::new(201, r#"{"id":1}"#)));

            let sink = RecordingSink::default();
            let source = config(true).with(API_KEY_KEY, "super-secret");
            let client = GophishClient::new(&source, transport, sink.clone());

            client.request(request).await.unwrap();

            let messages = sink.messages();
            assert_eq!(messages.len(), 2, "{endpoint}");
            for (_, message) in &messages {
                assert!(!message.contains("super-secret"), "key leaked: {message}");
            }
            let (level, sent) = &messages[0];
            assert_eq!(*level, "info");
            assert!(sent.contains("Authorization: [REDACTED API KEY]"), "{sent}");
            assert!(sent.contains(endpoint), "{sent}");
            let (level, reply) = &messages[1];
            assert_eq!(*level, "info");
            assert!(reply.contains("Status Code: 201"));
        }
    }

    #[tokio::test]
    async fn test_transport_error_becomes_response() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_, _| Err(TransportError::new(500, "boom")));

        let sink = RecordingSink::default();
        let client = GophishClient::new(&config(true), transport, sink.clone());

        let response = client
            .request(RequestSpec::new(Method::Get, "/api/campaigns/"))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, ResponseBody::TransportError("boom".to_string()));

        let messages = sink.messages();
        let (level, last) = messages.last().unwrap();
        assert_eq!(*level, "info");
        assert!(last.contains("REQUEST ERROR"));
        assert!(last.contains("boom"));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_returned_raw() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_, _| Ok(RawResponse::new(200, "not json")));

        let sink = RecordingSink::default();
        let client = GophishClient::new(&config(true), transport, sink.clone());

        let response = client
            .request(RequestSpec::new(Method::Get, "/api/pages/"))
            .await
            .unwrap();

        assert_eq!(response.body, ResponseBody::Raw(b"not json".to_vec()));
        let messages = sink.messages();
        assert!(messages[1].1.contains("JSON Parsing Error"));
    }

    #[tokio::test]
    async fn test_error_status_is_passed_through() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_, _| {
            Ok(RawResponse::new(
                404,
                r#"{"message":"Template not found","success":false,"data":null}"#,
            ))
        });

        let client = GophishClient::new(&config(false), transport, MockLogSink::new());

        let response = client
            .request(RequestSpec::new(Method::Get, "/api/templates/42"))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(response.text().contains("Template not found"));
    }
}
