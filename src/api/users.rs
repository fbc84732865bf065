//! User accounts.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::{Method, Transport};
use crate::logging::LogSink;

#[derive(Serialize)]
struct NewUser<'a> {
    role: &'a str,
    password: &'a str,
    username: &'a str,
}

/// Changes to a user account. Absent fields are left out of the request,
/// so the server keeps their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserPatch {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub async fn get_users(&self) -> ApiResult {
        self.list(Collection::Users).await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult {
        self.fetch(Collection::Users, id).await
    }

    /// `role` is a role slug such as `admin` or `user`.
    pub async fn create_user(&self, username: &str, password: &str, role: &str) -> ApiResult {
        let body = NewUser {
            role,
            password,
            username,
        };
        self.create(Collection::Users, &body).await
    }

    /// Renames a user, resets their password or changes their role.
    pub async fn modify_user(&self, id: i64, patch: &UserPatch) -> ApiResult {
        self.send_json(Method::Put, Collection::Users.item_path(id), patch)
            .await
    }

    /// Deleting a user also deletes every object and campaign they created.
    pub async fn delete_user(&self, id: i64) -> ApiResult {
        self.remove(Collection::Users, id).await
    }
}
