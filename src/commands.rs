//! Runs parsed CLI commands against a client.

use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;

use crate::{
    api::{Collection, UserPatch},
    cli::{BodyArgs, CampaignAction, Command, CrudAction, GroupAction, PageAction, TemplateAction, UserAction},
    client::{ApiResponse, GophishClient, ResponseBody},
    http::Transport,
    logging::LogSink,
};

/// Sends the request `command` describes and returns the response.
#[tracing::instrument(skip(client, command), fields(resource = command.resource()))]
pub async fn run<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    command: &Command,
) -> Result<ApiResponse> {
    match command {
        Command::SendingProfiles(action) => crud(client, Collection::SendingProfiles, action).await,
        Command::Templates(action) => templates(client, action).await,
        Command::Pages(action) => pages(client, action).await,
        Command::Groups(action) => groups(client, action).await,
        Command::Campaigns(action) => campaigns(client, action).await,
        Command::Users(action) => users(client, action).await,
    }
}

async fn crud<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    collection: Collection,
    action: &CrudAction,
) -> Result<ApiResponse> {
    debug!("{} {:?}", collection, action);
    let response = match action {
        CrudAction::List => client.list(collection).await?,
        CrudAction::Get { id } => client.fetch(collection, *id).await?,
        CrudAction::Create(body) => client.create(collection, &read_body(body)?).await?,
        CrudAction::Update { id, body } => {
            client.modify(collection, *id, &read_body(body)?).await?
        }
        CrudAction::Delete { id } => client.remove(collection, *id).await?,
    };
    Ok(response)
}

async fn templates<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    action: &TemplateAction,
) -> Result<ApiResponse> {
    match action {
        TemplateAction::Crud(action) => crud(client, Collection::Templates, action).await,
        TemplateAction::Import {
            file,
            convert_links,
        } => {
            let content = read_input(file)?;
            Ok(client.import_template(*convert_links, &content).await?)
        }
    }
}

async fn pages<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    action: &PageAction,
) -> Result<ApiResponse> {
    match action {
        PageAction::Crud(action) => crud(client, Collection::LandingPages, action).await,
        PageAction::ImportSite {
            url,
            include_resources,
        } => Ok(client.import_site(*include_resources, url).await?),
    }
}

async fn groups<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    action: &GroupAction,
) -> Result<ApiResponse> {
    match action {
        GroupAction::Crud(action) => crud(client, Collection::Groups, action).await,
        GroupAction::Summary { id: None } => Ok(client.get_groups_summary().await?),
        GroupAction::Summary { id: Some(id) } => Ok(client.get_group_summary(*id).await?),
        GroupAction::Import { file } => {
            let csv = read_input(file)?;
            Ok(client.import_group(&csv).await?)
        }
    }
}

async fn campaigns<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    action: &CampaignAction,
) -> Result<ApiResponse> {
    let response = match action {
        CampaignAction::List => client.get_campaigns().await?,
        CampaignAction::Get { id } => client.get_campaign(*id).await?,
        CampaignAction::Create(body) => client.create_campaign(&read_body(body)?).await?,
        CampaignAction::Delete { id } => client.delete_campaign(*id).await?,
        CampaignAction::Results { id } => client.get_campaign_results(*id).await?,
        CampaignAction::Summary { id } => client.get_campaign_summary(*id).await?,
        CampaignAction::Complete { id } => client.complete_campaign(*id).await?,
    };
    Ok(response)
}

async fn users<T: Transport, L: LogSink>(
    client: &GophishClient<T, L>,
    action: &UserAction,
) -> Result<ApiResponse> {
    let response = match action {
        UserAction::List => client.get_users().await?,
        UserAction::Get { id } => client.get_user(*id).await?,
        UserAction::Create {
            username,
            password,
            role,
        } => client.create_user(username, password, role).await?,
        UserAction::Update {
            id,
            username,
            password,
            role,
        } => {
            let patch = UserPatch {
                username: username.clone(),
                password: password.clone(),
                role: role.clone(),
            };
            client.modify_user(*id, &patch).await?
        }
        UserAction::Delete { id } => client.delete_user(*id).await?,
    };
    Ok(response)
}

fn read_body(body: &BodyArgs) -> Result<Value> {
    let text = read_input(&body.file)?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} does not contain valid JSON", body.file.display()))
}

/// Reads a file, or stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Response body for display: pretty JSON when it parses, raw text otherwise.
pub fn render(response: &ApiResponse) -> String {
    match response.json::<Value>() {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
        Err(_) => response.text().into_owned(),
    }
}

/// Writes the body to `out` and fails unless the server answered with 2xx.
pub fn print_response<W: Write>(response: &ApiResponse, out: &mut W) -> Result<()> {
    match &response.body {
        ResponseBody::TransportError(message) => {
            bail!("Request failed (code {}): {}", response.status, message)
        }
        ResponseBody::Raw(bytes) => {
            if !bytes.is_empty() {
                writeln!(out, "{}", render(response)).context("Failed to write response")?;
            }
            if !response.is_success() {
                bail!("Gophish returned HTTP {}", response.status);
            }
            Ok(())
        }
    }
}
