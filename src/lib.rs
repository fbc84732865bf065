pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod http;
pub mod logging;

pub use api::{Collection, UserPatch};
pub use client::{ApiResponse, ApiResult, ClientError, GophishClient, ResponseBody};
pub use config::{ClientConfig, ConfigSource, StaticConfig};
pub use http::{HttpTransport, Transport, TransportError};
pub use logging::{LogChannel, LogSink};
