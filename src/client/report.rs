//! Human-readable log messages for the request routine.

use serde_json::Value;
use std::fmt::Write;

use crate::http::{RawResponse, RequestSpec, TransportError};

pub const REDACTED_API_KEY: &str = "[REDACTED API KEY]";

pub const MISSING_CONFIGURATION: &str =
    "Gophish host or API key not set! Please check the client configuration.";

/// `request` must already be redacted.
pub fn sending_request(request: &RequestSpec) -> String {
    let mut out = String::from("SENDING REQUEST\n");
    endpoint_line(&mut out, request);
    out.push_str("\nRequest Options:\n  headers:\n");
    for (name, value) in &request.headers {
        let _ = writeln!(out, "    {}: {}", name, value);
    }
    out.push_str("  body:\n");
    match &request.body {
        Some(body) => indent(&mut out, &display_json_or_text(body)),
        None => out.push_str("    (none)\n"),
    }
    out
}

pub fn request_response(request: &RequestSpec, response: &RawResponse) -> String {
    let mut out = String::from("REQUEST RESPONSE\n");
    endpoint_line(&mut out, request);
    let _ = writeln!(out, "\nStatus Code: {}", response.status);
    out.push_str("\nResponse Body:\n");
    indent(&mut out, &display_json(&response.body));
    out
}

pub fn request_error(request: &RequestSpec, error: &TransportError) -> String {
    let mut out = String::from("REQUEST ERROR\n");
    endpoint_line(&mut out, request);
    let _ = writeln!(out, "\nStatus Code: {}", error.code);
    let _ = writeln!(out, "\nError Message: {}", error.message);
    out
}

fn endpoint_line(out: &mut String, request: &RequestSpec) {
    let _ = writeln!(out, "Requested Endpoint: ({}) {}", request.method, request.path);
}

/// Pretty JSON, or a parse-error note in place of the body.
pub fn display_json(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => pretty(&value),
        Err(e) => format!("JSON Parsing Error: {}", e),
    }
}

fn display_json_or_text(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => pretty(&value),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn indent(out: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{AUTHORIZATION, Method};
    use serde_json::json;

    #[test]
    fn test_sending_request_lists_headers_and_body() {
        let request = RequestSpec::new(Method::Post, "/api/groups/")
            .header(AUTHORIZATION, REDACTED_API_KEY)
            .json(&json!({"name": "staff"}))
            .unwrap();

        let message = sending_request(&request);

        assert!(message.starts_with("SENDING REQUEST\n"));
        assert!(message.contains("Requested Endpoint: (POST) /api/groups/"));
        assert!(message.contains("Authorization: [REDACTED API KEY]"));
        assert!(message.contains("\"name\": \"staff\""));
    }

    #[test]
    fn test_sending_request_without_body() {
        let request = RequestSpec::new(Method::Delete, "/api/users/2");
        assert!(sending_request(&request).contains("(none)"));
    }

    #[test]
    fn test_request_response_with_unparseable_body() {
        let request = RequestSpec::new(Method::Get, "/api/pages/");
        let response = RawResponse::new(502, "<html>Bad Gateway</html>");

        let message = request_response(&request, &response);

        assert!(message.contains("Status Code: 502"));
        assert!(message.contains("JSON Parsing Error"));
        assert!(!message.contains("Bad Gateway"));
    }

    #[test]
    fn test_request_error() {
        let request = RequestSpec::new(Method::Get, "/api/campaigns/");
        let message = request_error(&request, &TransportError::new(500, "boom"));

        assert!(message.starts_with("REQUEST ERROR\n"));
        assert!(message.contains("Status Code: 500"));
        assert!(message.contains("Error Message: boom"));
    }

    #[test]
    fn test_display_json_empty_body_is_parse_error() {
        assert!(display_json(b"").starts_with("JSON Parsing Error"));
    }
}
