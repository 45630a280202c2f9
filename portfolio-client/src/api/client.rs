use anyhow::{bail, Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::dto::{GlobalSearchQuery, SearchResponse};
use crate::listing::ListPage;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash keeps any path prefix when joining endpoints.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).with_context(|| format!("Invalid API URL: {}", base_url))?;

        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("GET {} returned {}: {}", url.path(), status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response from {}", url.path()))
    }

    pub(crate) fn global_search_url(&self, query: &GlobalSearchQuery) -> Result<Url> {
        let mut url = self.endpoint("api/GlobalSearch")?;
        url.query_pairs_mut().extend_pairs(query.pairs());
        Ok(url)
    }

    pub async fn global_search(&self, query: &GlobalSearchQuery) -> Result<SearchResponse> {
        let url = self.global_search_url(query)?;
        self.get_json(url).await
    }

    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        let mut url = self.endpoint("api/GlobalSearch/suggestions")?;
        url.query_pairs_mut().append_pair("query", query);
        self.get_json(url).await
    }

    pub(crate) fn list_url(&self, page: ListPage, filter: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint(page.api_path())?;
        if let Some(filter) = filter {
            url.query_pairs_mut()
                .append_pair(page.filter_param(), filter);
        }
        Ok(url)
    }

    /// The whole list behind a page. Items stay as raw JSON because the
    /// list view reads ids under either `id` or `Id`.
    pub async fn list(&self, page: ListPage, filter: Option<&str>) -> Result<Vec<Value>> {
        let url = self.list_url(page, filter)?;
        self.get_json(url).await
    }
}
