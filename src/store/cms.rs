use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::{Collection, Items, RecordStore};
use crate::error::StoreError;

/// Record store backed by the headless CMS HTTP API.
///
/// `GET {base}/collections/{collection}/items` returns `{"items": [...]}` and
/// `GET {base}/collections/{collection}/items/{id}` returns a single item.
#[derive(Clone)]
pub struct CmsStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl CmsStore {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, StoreError> {
        let parsed = Url::parse(base_url).map_err(|e| StoreError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(StoreError::BaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
            api_key,
        })
    }

    /// `{base}/collections/{collection}/items[/{id}]`. The id is pushed as a
    /// single percent-encoded path segment.
    fn items_url(&self, collection: Collection, id: Option<&str>) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| StoreError::BaseUrl {
                url: self.base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            })?;
            segments
                .pop_if_empty()
                .extend(["collections", collection.as_str(), "items"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl RecordStore for CmsStore {
    async fn get_all(&self, collection: Collection) -> Result<Items, StoreError> {
        let url = self.items_url(collection, None)?;
        debug!("Fetching {collection} from {url}");

        let response = self.request(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status { collection, status });
        }

        Ok(response.json::<Items>().await?)
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let url = self.items_url(collection, Some(id))?;
        debug!("Fetching {collection} record from {url}");

        let response = self.request(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status { collection, status });
        }

        let item = response.json::<serde_json::Value>().await?;
        Ok((!item.is_null()).then_some(item))
    }
}
