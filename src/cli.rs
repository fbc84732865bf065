//! Command-line arguments for the `gophish` binary.

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{API_KEY_KEY, HOST_KEY, LOGGING_KEY, StaticConfig};

/// gophish - command-line client for the Gophish REST API
///
/// Every command sends one request and prints the response body. The
/// connection settings can also come from GOPHISH_HOST, GOPHISH_API_KEY,
/// GOPHISH_LOGGING and GOPHISH_TIMEOUT.
///
/// Examples:
///   gophish templates list
///   gophish groups create --file staff.json
///   gophish users update 4 --username bob --role admin
#[derive(Parser, Debug)]
#[command(name = "gophish", author, version = env!("GOPHISH_VERSION"), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Gophish base URL, e.g. https://gophish.example.com:3333
    #[arg(long, env = "GOPHISH_HOST", value_name = "URL", global = true)]
    pub host: Option<String>,

    /// API key from the Gophish settings page
    #[arg(
        long = "api-key",
        env = "GOPHISH_API_KEY",
        value_name = "KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// Log every request and response (API key redacted)
    #[arg(
        long = "log-requests",
        env = "GOPHISH_LOGGING",
        value_parser = FalseyValueParser::new(),
        global = true
    )]
    pub log_requests: bool,

    /// Overall request timeout in seconds
    #[arg(
        long,
        env = "GOPHISH_TIMEOUT",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Client configuration assembled from the global options.
    pub fn config_source(&self) -> StaticConfig {
        StaticConfig::new()
            .with_opt(HOST_KEY, self.host.clone())
            .with_opt(API_KEY_KEY, self.api_key.clone())
            .with(LOGGING_KEY, self.log_requests.to_string())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// SMTP sending profiles
    #[command(subcommand)]
    SendingProfiles(CrudAction),

    /// Email templates
    #[command(subcommand)]
    Templates(TemplateAction),

    /// Landing pages
    #[command(subcommand)]
    Pages(PageAction),

    /// Target groups
    #[command(subcommand)]
    Groups(GroupAction),

    /// Campaigns
    #[command(subcommand)]
    Campaigns(CampaignAction),

    /// User accounts
    #[command(subcommand)]
    Users(UserAction),
}

impl Command {
    /// Subcommand name, safe to log. Actions may carry passwords.
    pub fn resource(&self) -> &'static str {
        match self {
            Command::SendingProfiles(_) => "sending-profiles",
            Command::Templates(_) => "templates",
            Command::Pages(_) => "pages",
            Command::Groups(_) => "groups",
            Command::Campaigns(_) => "campaigns",
            Command::Users(_) => "users",
        }
    }
}

/// Where a JSON request body is read from.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct BodyArgs {
    /// JSON file with the request body ("-" for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CrudAction {
    /// List all
    List,
    /// Show one by ID
    Get { id: i64 },
    /// Create from a JSON body
    Create(BodyArgs),
    /// Replace one by ID with a JSON body (the ID is filled in)
    Update {
        id: i64,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete one by ID
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TemplateAction {
    #[command(flatten)]
    Crud(CrudAction),

    /// Parse a raw email (RFC 2045, headers included) into a template
    Import {
        /// File holding the email ("-" for stdin)
        #[arg(long, short = 'f', value_name = "PATH")]
        file: PathBuf,

        /// Rewrite links to the campaign tracking URL
        #[arg(long)]
        convert_links: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PageAction {
    #[command(flatten)]
    Crud(CrudAction),

    /// Fetch a site's HTML for use as a landing page
    ImportSite {
        url: String,

        /// Add a <base> tag so static resources still resolve
        #[arg(long)]
        include_resources: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GroupAction {
    #[command(flatten)]
    Crud(CrudAction),

    /// Summary of all groups, or of one group when ID is given
    Summary { id: Option<i64> },

    /// Parse a CSV of targets (First Name,Last Name,Email,Position)
    Import {
        /// CSV file ("-" for stdin)
        #[arg(long, short = 'f', value_name = "PATH")]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CampaignAction {
    /// List all campaigns
    List,
    /// Show one campaign
    Get { id: i64 },
    /// Create and launch a campaign from a JSON body
    Create(BodyArgs),
    /// Delete a campaign
    Delete { id: i64 },
    /// Campaign results and timeline
    Results { id: i64 },
    /// Campaign summary statistics
    Summary { id: i64 },
    /// Mark a campaign as complete
    Complete { id: i64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum UserAction {
    /// List all users
    List,
    /// Show one user
    Get { id: i64 },
    /// Create a user
    Create {
        username: String,
        #[arg(long)]
        password: String,
        /// Role slug
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Change a user's name, password or role
    Update {
        id: i64,
        /// Username to keep or set (always sent)
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user and everything they created
    Delete { id: i64 },
}
