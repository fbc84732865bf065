//! Gophish REST resources.
//!
//! Each submodule adds one resource's operations to [`GophishClient`]. They
//! share the CRUD helpers below, keyed by [`Collection`].

mod campaigns;
mod groups;
mod pages;
mod sending_profiles;
mod templates;
mod users;

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::client::{ApiResult, ClientError, GophishClient};
use crate::http::{Method, RequestSpec, Transport};
use crate::logging::LogSink;

pub use users::UserPatch;

/// The API's top-level collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    SendingProfiles,
    Templates,
    LandingPages,
    Groups,
    Campaigns,
    Users,
}

impl Collection {
    /// Collection endpoint, with trailing slash.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::SendingProfiles => "/api/smtp/",
            Collection::Templates => "/api/templates/",
            Collection::LandingPages => "/api/pages/",
            Collection::Groups => "/api/groups/",
            Collection::Campaigns => "/api/campaigns/",
            Collection::Users => "/api/users/",
        }
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}{}", self.path(), id)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::SendingProfiles => "sending profiles",
            Collection::Templates => "templates",
            Collection::LandingPages => "landing pages",
            Collection::Groups => "groups",
            Collection::Campaigns => "campaigns",
            Collection::Users => "users",
        };
        f.write_str(name)
    }
}

/// Serializes `body` and sets its `id` field, replacing any `id` already
/// there. The body must serialize to a JSON object.
pub fn with_id<B: Serialize + ?Sized>(id: i64, body: &B) -> Result<Value, ClientError> {
    match serde_json::to_value(body)? {
        Value::Object(mut fields) => {
            fields.insert("id".to_string(), Value::from(id));
            Ok(Value::Object(fields))
        }
        other => Err(ClientError::InvalidBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub(crate) async fn get_path(&self, path: impl Into<String>) -> ApiResult {
        self.request(RequestSpec::new(Method::Get, path)).await
    }

    pub(crate) async fn delete_path(&self, path: impl Into<String>) -> ApiResult {
        self.request(RequestSpec::new(Method::Delete, path)).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: impl Into<String>,
        body: &B,
    ) -> ApiResult {
        let request = RequestSpec::new(method, path).json(body)?;
        self.request(request).await
    }

    /// GET on a collection endpoint.
    pub async fn list(&self, collection: Collection) -> ApiResult {
        self.get_path(collection.path()).await
    }

    /// GET one item. Unknown ids come back as the server's 404 reply.
    pub async fn fetch(&self, collection: Collection, id: i64) -> ApiResult {
        self.get_path(collection.item_path(id)).await
    }

    pub async fn create<B: Serialize + ?Sized + Sync>(
        &self,
        collection: Collection,
        body: &B,
    ) -> ApiResult {
        self.send_json(Method::Post, collection.path(), body).await
    }

    /// PUT the full representation of an item; `id` is injected into `body`.
    pub async fn modify<B: Serialize + ?Sized + Sync>(
        &self,
        collection: Collection,
        id: i64,
        body: &B,
    ) -> ApiResult {
        let body = with_id(id, body)?;
        self.send_json(Method::Put, collection.item_path(id), &body)
            .await
    }

    pub async fn remove(&self, collection: Collection, id: i64) -> ApiResult {
        self.delete_path(collection.item_path(id)).await
    }
}
