//! Email templates.

use serde::Serialize;

use super::Collection;
use crate::client::{ApiResult, GophishClient};
use crate::http::{Method, Transport};
use crate::logging::LogSink;

const IMPORT_EMAIL: &str = "/api/import/email/";

#[derive(Serialize)]
struct ImportEmail<'a> {
    convert_links: bool,
    content: &'a str,
}

impl<T: Transport, L: LogSink> GophishClient<T, L> {
    pub async fn get_templates(&self) -> ApiResult {
        self.list(Collection::Templates).await
    }

    /// Returns 404 if the template doesn't exist.
    pub async fn get_template(&self, id: i64) -> ApiResult {
        self.fetch(Collection::Templates, id).await
    }

    pub async fn create_template<B: Serialize + ?Sized + Sync>(&self, body: &B) -> ApiResult {
        self.create(Collection::Templates, body).await
    }

    /// Replaces a template. The whole template must be supplied, not only
    /// the fields being changed.
    pub async fn modify_template<B: Serialize + ?Sized + Sync>(
        &self,
        id: i64,
        body: &B,
    ) -> ApiResult {
        self.modify(Collection::Templates, id, body).await
    }

    pub async fn delete_template(&self, id: i64) -> ApiResult {
        self.remove(Collection::Templates, id).await
    }

    /// Converts a raw email into template fields.
    ///
    /// `content` is the original message in RFC 2045 format, headers
    /// included. With `convert_links` the server rewrites links to point at
    /// the campaign's tracking URL. Nothing is saved; the reply holds the
    /// parsed template for a later [`create_template`](Self::create_template).
    pub async fn import_template(&self, convert_links: bool, content: &str) -> ApiResult {
        let body = ImportEmail {
            convert_links,
            content,
        };
        self.send_json(Method::Post, IMPORT_EMAIL, &body).await
    }
}
