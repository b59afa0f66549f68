//! Search API module.
//!
//! This module provides:
//! - HTTP client for the search REST API
//! - Image byte fetching
//! - API response types
//!
//! The traits below are the seams the download pipeline is written against,
//! so pagination and downloading can run without a network.

pub mod client;
pub mod types;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::error::Result;

pub use client::{TwitterApi, PAGE_SIZE};
pub use types::*;

/// Body of an image response, delivered in chunks.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// A fetched image.
pub struct ImageBody {
    /// Content length if the server reported one.
    pub content_length: Option<u64>,
    pub stream: ByteStream,
}

/// Paged search over recent posts.
#[async_trait]
pub trait SearchApi {
    /// Fetch one page (1-based) of posts matching `query`, including media entities.
    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<Vec<Post>>;
}

/// Generic URL fetch for image bytes.
#[async_trait]
pub trait ImageFetcher {
    async fn fetch_image(&self, url: &str) -> Result<ImageBody>;
}
