//! Target groups.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::{Method, Transport};
use crate::logging::LogSink;

const IMPORT_GROUP: &str = "/api/import/group/";

#[derive(Serialize)]
struct ImportGroup<'a> {
    file: &'a str,
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub async fn get_groups(&self) -> ApiResult {
        self.list(Collection::Groups).await
    }

    pub async fn get_group(&self, id: i64) -> ApiResult {
        self.fetch(Collection::Groups, id).await
    }

    /// Name, target count and modification date of every group.
    pub async fn get_groups_summary(&self) -> ApiResult {
        self.get_path(format!("{}summary", Collection::Groups.path()))
            .await
    }

    pub async fn get_group_summary(&self, id: i64) -> ApiResult {
        self.get_path(format!("{}/summary", Collection::Groups.item_path(id)))
            .await
    }

    pub async fn create_group<B: Serialize + ?Sized + Sync>(&self, body: &B) -> ApiResult {
        self.create(Collection::Groups, body).await
    }

    pub async fn modify_group<B: Serialize + ?Sized + Sync>(&self, id: i64, body: &B) -> ApiResult {
        self.modify(Collection::Groups, id, body).await
    }

    pub async fn delete_group(&self, id: i64) -> ApiResult {
        self.remove(Collection::Groups, id).await
    }

    /// Parses CSV target data server-side. The reply is a list of targets
    /// ready to be used in [`create_group`](Self::create_group).
    pub async fn import_group(&self, csv: &str) -> ApiResult {
        self.send_json(Method::Post, IMPORT_GROUP, &ImportGroup { file: csv })
            .await
    }
}
