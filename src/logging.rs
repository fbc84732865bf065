//! Diagnostic log sink.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Channel name the production sink logs under.
pub const CHANNEL: &str = "gophish";

/// Target prefix of this library's own `log`/`tracing` records.
pub const LIBRARY_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Logger for the binary: `warn` by default, overridable through `env`.
///
/// With `log_requests` the [`CHANNEL`] target is raised to `info`. Filter
/// directives match by prefix and `gophish` also prefixes `gophish_client`,
/// so the library's spans and debug records are pinned back to `warn`
/// unless `env` names them explicitly.
pub fn logger_builder(env: Env<'_>, log_requests: bool) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if log_requests {
        builder
            .filter_module(CHANNEL, LevelFilter::Info)
            .filter_module(LIBRARY_TARGET, LevelFilter::Warn);
    }
    builder.parse_env(env);
    builder
}

/// Receives formatted diagnostic messages from the client. Must not fail.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to the `log` facade with the channel as target.
#[derive(Debug, Clone)]
pub struct LogChannel {
    name: String,
}

impl LogChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for LogChannel {
    fn default() -> Self {
        Self::new(CHANNEL)
    }
}

impl LogSink for LogChannel {
    fn info(&self, message: &str) {
        log::info!(target: self.name.as_str(), "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: self.name.as_str(), "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    fn quiet_env() -> Env<'static> {
        Env::new().filter("GOPHISH_CLIENT_TEST_UNSET_LOG")
    }

    #[test]
    fn test_logger_defaults_to_warn() {
        let logger = logger_builder(quiet_env(), false).build();
        assert!(!enabled(&logger, CHANNEL, Level::Info));
        assert!(!enabled(&logger, "gophish_client::commands", Level::Info));
        assert!(enabled(&logger, CHANNEL, Level::Warn));
    }

    #[test]
    fn test_log_requests_raises_only_the_channel() {
        let logger = logger_builder(quiet_env(), true).build();
        assert!(enabled(&logger, CHANNEL, Level::Info));
        assert!(!enabled(&logger, "gophish_client::commands", Level::Info));
        assert!(!enabled(&logger, "gophish_client::http::client", Level::Debug));
        assert!(!enabled(&logger, "reqwest::connect", Level::Info));
    }

    #[test]
    fn test_library_target_is_crate_name() {
        assert_eq!(LIBRARY_TARGET, "gophish_client");
        assert!(LIBRARY_TARGET.starts_with(CHANNEL));
    }

    #[test]
    fn test_default_channel() {
        assert_eq!(LogChannel::default().name(), "gophish");
    }

    #[test_log::test]
    fn test_log_channel_does_not_panic_without_logger_config() {
        let sink = LogChannel::new("gophish-test");
        sink.info("info message");
        sink.error("error message");
    }
}
