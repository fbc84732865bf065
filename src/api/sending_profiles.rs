//! Sending profiles: the SMTP settings used to deliver campaign emails.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::Transport;
use crate::logging::LogSink;

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    /// Lists the sending profiles owned by the authenticated user.
    pub async fn get_sending_profiles(&self) -> ApiResult {
        self.list(Collection::SendingProfiles).await
    }

    /// Returns 404 if no sending profile has this id.
    pub async fn get_sending_profile(&self, id: i64) -> ApiResult {
        self.fetch(Collection::SendingProfiles, id).await
    }

    pub async fn create_sending_profile<B: Serialize + ?Sized + Sync>(&self, body: &B) -> ApiResult {
        self.create(Collection::SendingProfiles, body).await
    }

    /// `body` is the complete profile; its `id` is set from `id`.
    pub async fn modify_sending_profile<B: Serialize + ?Sized + Sync>(
        &self,
        id: i64,
        body: &B,
    ) -> ApiResult {
        self.modify(Collection::SendingProfiles, id, body).await
    }

    pub async fn delete_sending_profile(&self, id: i64) -> ApiResult {
        self.remove(Collection::SendingProfiles, id).await
    }
}
