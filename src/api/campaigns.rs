//! Campaigns. The API has no update endpoint for them.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::Transport;
use crate::logging::LogSink;

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub async fn get_campaigns(&self) -> ApiResult {
        self.list(Collection::Campaigns).await
    }

    pub async fn get_campaign(&self, id: i64) -> ApiResult {
        self.fetch(Collection::Campaigns, id).await
    }

    /// Creates and launches a campaign.
    pub async fn create_campaign<B: Serialize + ?Sized + Sync>(&self, body: &B) -> ApiResult {
        self.create(Collection::Campaigns, body).await
    }

    /// Results and event timeline for one campaign.
    pub async fn get_campaign_results(&self, id: i64) -> ApiResult {
        self.get_path(format!("{}/results", Collection::Campaigns.item_path(id)))
            .await
    }

    pub async fn get_campaign_summary(&self, id: i64) -> ApiResult {
        self.get_path(format!("{}/summary", Collection::Campaigns.item_path(id)))
            .await
    }

    /// Marks the campaign complete. The API exposes this as a GET.
    pub async fn complete_campaign(&self, id: i64) -> ApiResult {
        self.get_path(format!("{}/complete", Collection::Campaigns.item_path(id)))
            .await
    }

    pub async fn delete_campaign(&self, id: i64) -> ApiResult {
        self.remove(Collection::Campaigns, id).await
    }
}
