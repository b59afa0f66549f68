//! Search API HTTP client.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::*;
use crate::api::{ImageBody, ImageFetcher, SearchApi};
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Maximum number of posts the search endpoint returns per page.
pub const PAGE_SIZE: u32 = 100;

/// Search API client authenticated with a bearer token.
pub struct TwitterApi {
    client: Client,
    base_url: Url,
    bearer_token: String,
}

impl TwitterApi {
    /// Create a new API client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let bearer_token = config
            .bearer_token
            .clone()
            .ok_or_else(|| Error::MissingConfig("bearer_token".to_string()))?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            bearer_token,
        })
    }

    /// Build the search URL for one page.
    fn search_url(&self, query: &str, page: u32, page_size: u32) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Api(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["search", "tweets.json"]);

        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &page_size.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("include_entities", "true");

        Ok(url)
    }

    /// Make an authenticated GET request.
    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.bearer_token),
            )
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        Ok(response)
    }
}

/// Limit a response body to the first 500 characters for error messages.
fn truncate_body(body: &str) -> String {
    body.chars().take(500).collect()
}

#[async_trait]
impl SearchApi for TwitterApi {
    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<Vec<Post>> {
        let url = self.search_url(query, page, page_size)?;

        let response = self.get(url).await.map_err(|e| Error::Search {
            page,
            message: e.to_string(),
        })?;
        let text = response.text().await?;
        tracing::debug!("Search response length: {} bytes", text.len());

        let search: SearchResponse = serde_json::from_str(&text).map_err(|e| Error::Search {
            page,
            message: format!(
                "Failed to parse search results: {} - Response: {}",
                e,
                truncate_body(&text)
            ),
        })?;

        Ok(search.statuses)
    }
}

#[async_trait]
impl ImageFetcher for TwitterApi {
    async fn fetch_image(&self, url: &str) -> Result<ImageBody> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content_length = response.content_length();
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Error::Download(format!("Stream error: {}", e))))
            .boxed();

        Ok(ImageBody {
            content_length,
            stream,
        })
    }
}
