//! Client configuration.
//!
//! The host application owns the configuration store; the client only needs
//! three values out of it, read once through [`ConfigSource`]:
//!
//! - `host` - Gophish base URL, joined with endpoint paths as-is
//! - `api_key` - sent verbatim as the `Authorization` header
//! - `logging` - whether request/response pairs are written to the log sink

use std::collections::BTreeMap;

pub const HOST_KEY: &str = "host";
pub const API_KEY_KEY: &str = "api_key";
pub const LOGGING_KEY: &str = "logging";

/// Read-only access to the host application's configuration.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Map-backed configuration, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConfig {
    values: BTreeMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the updated config.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Sets `key` only when a value is present.
    pub fn with_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// The values the client extracts at construction. Immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: Option<String>,
    pub api_key: Option<String>,
    pub logging_enabled: bool,
}

impl ClientConfig {
    #[tracing::instrument(skip(source))]
    pub fn load<C: ConfigSource + ?Sized>(source: &C) -> Self {
        Self {
            host: non_empty(source.get(HOST_KEY)),
            api_key: non_empty(source.get(API_KEY_KEY)),
            logging_enabled: source.get(LOGGING_KEY).is_some_and(|v| parse_flag(&v)),
        }
    }

    /// Returns host and key when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.host.as_deref(), self.api_key.as_deref()) {
            (Some(host), Some(key)) => Some((host, key)),
            _ => None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Interprets a configuration flag. Anything unrecognised is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
