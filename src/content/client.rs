//! Content API access
//!
//! [`ContentSource`] is the seam between the site and the hosted content
//! service. [`DeliveryClient`] talks to the real delivery/preview API;
//! [`MemorySource`] serves a fixed list of entries for tests and demos.

use async_trait::async_trait;
use serde::Deserialize;

use super::entry::{Entry, EntryCollection};
use crate::config::SiteConfig;
use crate::error::ContentError;

/// A read-only entry query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    pub content_type: String,
    pub id: Option<String>,
    pub select: Vec<String>,
    pub limit: Option<usize>,
}

impl EntryQuery {
    /// Query all entries of a content type
    pub fn new(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            id: None,
            select: Vec::new(),
            limit: None,
        }
    }

    /// Restrict to a single `sys.id`
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Only return the listed fields
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs for the delivery API
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("content_type", self.content_type.clone())];
        if let Some(id) = &self.id {
            params.push(("sys.id", id.clone()));
        }
        if !self.select.is_empty() {
            params.push(("select", self.select.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Something that can answer entry queries
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn entries(&self, query: &EntryQuery) -> Result<Vec<Entry>, ContentError>;
}

/// Client for the hosted delivery (or preview) API
pub struct DeliveryClient {
    base_url: String,
    access_token: String,
    client: reqwest::Client,
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl DeliveryClient {
    /// Create a client for a space on the given host
    pub fn new(host: &str, space_id: &str, environment: &str, access_token: &str) -> Self {
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", host.trim_end_matches('/'))
        };
        Self {
            base_url: format!("{}/spaces/{}/environments/{}", base_url, space_id, environment),
            access_token: access_token.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create from config, picking preview or delivery settings
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.host(),
            &config.space_id,
            &config.environment,
            config.access_token(),
        )
    }

    /// Build API URL
    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ContentSource for DeliveryClient {
    async fn entries(&self, query: &EntryQuery) -> Result<Vec<Entry>, ContentError> {
        let url = self.api_url("entries");
        tracing::debug!("GET {} {:?}", url, query.to_params());

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ContentError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let collection: EntryCollection = serde_json::from_str(&body)?;
        tracing::debug!(
            "Received {} of {} entries (skip {}, limit {})",
            collection.items.len(),
            collection.total,
            collection.skip,
            collection.limit
        );
        if collection.skip + collection.items.len() < collection.total {
            tracing::warn!(
                "Content API returned {} of {} entries; the rest were not fetched",
                collection.items.len(),
                collection.total
            );
        }
        Ok(collection.items)
    }
}

/// In-memory content source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<Entry>,
}

impl MemorySource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn entries(&self, query: &EntryQuery) -> Result<Vec<Entry>, ContentError> {
        let projected = !query.select.is_empty()
            && !query.select.iter().any(|f| f == "fields.articleContent");

        let items = self
            .entries
            .iter()
            .filter(|e| query.id.as_deref().map_or(true, |id| e.id == id))
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|e| {
                let mut e = e.clone();
                if projected {
                    e.article_content.clear();
                }
                e
            })
            .collect();
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client = DeliveryClient::new("cdn.contentful.com", "space", "master", "TOKEN");
        assert_eq!(
            client.api_url("entries"),
            "https://cdn.contentful.com/spaces/space/environments/master/entries"
        );

        let local = DeliveryClient::new("http://localhost:8080/", "s", "dev", "t");
        assert_eq!(
            local.api_url("entries"),
            "http://localhost:8080/spaces/s/environments/dev/entries"
        );
    }

    #[test]
    fn test_query_params() {
        let query = EntryQuery::new("informationArticle")
            .with_id("abc")
            .select(["sys.id", "fields.title"])
            .limit(1000);
        assert_eq!(
            query.to_params(),
            vec![
                ("content_type", "informationArticle".to_string()),
                ("sys.id", "abc".to_string()),
                ("select", "sys.id,fields.title".to_string()),
                ("limit", "1000".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_memory_source_filters_by_id() {
        let source = MemorySource::new(vec![
            Entry::new("1", "One", "a").with_content("one"),
            Entry::new("2", "Two", "a").with_content("two"),
        ]);

        let all = source.entries(&EntryQuery::new("article")).await.unwrap();
        assert_eq!(all.len(), 2);

        let one = source
            .entries(&EntryQuery::new("article").with_id("2"))
            .await
            .unwrap();
        assert_eq!(one, vec![Entry::new("2", "Two", "a").with_content("two")]);
    }

    #[tokio::test]
    async fn test_memory_source_projection_drops_content() {
        let source = MemorySource::new(vec![Entry::new("1", "One", "a").with_content("body")]);
        let query = EntryQuery::new("article").select(["sys.id", "fields.title"]);
        let items = source.entries(&query).await.unwrap();
        assert!(items[0].article_content.is_empty());
    }
}
