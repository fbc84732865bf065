use anyhow::{Context, Result};
use clap::Parser;
use gophish_client::cli::Cli;
use gophish_client::commands::{print_response, run};
use gophish_client::logging::logger_builder;
use gophish_client::{GophishClient, HttpTransport, LogChannel};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger_builder(env_logger::Env::default(), cli.log_requests).init();

    let transport = HttpTransport::with_timeout(cli.timeout.map(Duration::from_secs))
        .context("Failed to build HTTP client")?;
    let client = GophishClient::new(&cli.config_source(), transport, LogChannel::default());

    let response = run(&client, &cli.command).await?;
    print_response(&response, &mut std::io::stdout().lock())
}
