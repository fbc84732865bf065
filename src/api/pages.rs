//! Landing pages shown to targets after they click a campaign link.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::{Method, Transport};
use crate::logging::LogSink;

const IMPORT_SITE: &str = "/api/import/site";

#[derive(Serialize)]
struct ImportSite<'a> {
    include_resources: bool,
    url: &'a str,
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub async fn get_landing_pages(&self) -> ApiResult {
        self.list(Collection::LandingPages).await
    }

    pub async fn get_landing_page(&self, id: i64) -> ApiResult {
        self.fetch(Collection::LandingPages, id).await
    }

    pub async fn create_landing_page<B: Serialize + ?Sized + Sync>(&self, body: &B) -> ApiResult {
        self.create(Collection::LandingPages, body).await
    }

    pub async fn modify_landing_page<B: Serialize + ?Sized + Sync>(
        &self,
        id: i64,
        body: &B,
    ) -> ApiResult {
        self.modify(Collection::LandingPages, id, body).await
    }

    pub async fn delete_landing_page(&self, id: i64) -> ApiResult {
        self.remove(Collection::LandingPages, id).await
    }

    /// Has the server fetch `url` so its HTML can be imported as a landing
    /// page. `include_resources` adds a `<base>` tag so relative static
    /// references keep resolving; usually left off.
    pub async fn import_site(&self, include_resources: bool, url: &str) -> ApiResult {
        let body = ImportSite {
            include_resources,
            url,
        };
        self.send_json(Method::Post, IMPORT_SITE, &body).await
    }
}
